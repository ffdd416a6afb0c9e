//! Static portfolio content shown by the terminal commands and the sidebar card.

pub const OWNER_NAME: &str = "Alex Chen";
pub const OWNER_ROLE: &str = "Full-Stack Developer";
pub const TERMINAL_TITLE: &str = "Alex Chen's Portfolio Terminal";
pub const DEFAULT_PROMPT: &str = "alex@portfolio:~$";

pub const WELCOME: &str = "Welcome to Alex Chen's Portfolio Terminal v2.1.0";
pub const HINT: &str = "Type \"help\" to see available commands.";
pub const RECALL_TIP: &str = "Pro tip: Use ↑/↓ arrow keys to navigate command history!";

/// Links rendered under the sidebar card, as (label, target).
pub const LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/alexchen"),
    ("LinkedIn", "https://linkedin.com/in/alexchen-dev"),
    ("Mail", "mailto:alex.chen.dev@gmail.com"),
];

pub const STATUS: &[&str] = &["Online", "Coding...", "Available"];

pub const ABOUT: &[&str] = &[
    "About Alex Chen",
    "──────────────",
    "Hey there! 👋",
    "",
    "I'm a passionate Full-Stack Developer with 5+ years of experience",
    "building scalable web applications and mobile solutions.",
    "",
    "I love turning complex problems into simple, beautiful, and",
    "intuitive solutions. When I'm not coding, you can find me",
    "exploring new technologies, contributing to open source, or",
    "enjoying a good cup of coffee ☕",
    "",
    "Location: San Francisco, CA",
    "Current Role: Senior Software Engineer @ TechCorp",
];

pub const EXPERIENCE: &[&str] = &[
    "Work Experience",
    "───────────────",
    "",
    "🏢 Senior Software Engineer @ TechCorp (2022 - Present)",
    "   • Led development of microservices architecture serving 1M+ users",
    "   • Improved application performance by 40% through optimization",
    "   • Mentored 5 junior developers and conducted code reviews",
    "",
    "🚀 Full-Stack Developer @ StartupXYZ (2020 - 2022)",
    "   • Built and deployed 15+ web applications using React/Node.js",
    "   • Implemented CI/CD pipelines reducing deployment time by 60%",
    "   • Collaborated with design team to create pixel-perfect UIs",
    "",
    "💻 Frontend Developer @ WebSolutions (2019 - 2020)",
    "   • Developed responsive websites for 20+ clients",
    "   • Integrated third-party APIs and payment gateways",
    "   • Maintained 99.9% uptime across all client projects",
];

pub const PROJECTS: &[&str] = &[
    "Recent Projects",
    "──────────────",
    "",
    "🎯 TaskMaster Pro - Project Management Platform",
    "   Tech: React, Node.js, PostgreSQL, Docker",
    "   • Real-time collaboration with 10K+ active users",
    "   • Advanced analytics and reporting dashboard",
    "   Link: https://taskmaster-pro.com",
    "",
    "🛒 E-Commerce Analytics Dashboard",
    "   Tech: Vue.js, Python, MongoDB, AWS",
    "   • Real-time sales tracking and inventory management",
    "   • Machine learning-powered sales predictions",
    "   Link: https://github.com/alexchen/ecommerce-analytics",
    "",
    "📱 WeatherBot - iOS/Android App",
    "   Tech: React Native, OpenWeather API, Firebase",
    "   • 50K+ downloads on app stores",
    "   • AI-powered weather recommendations",
    "   Link: https://weatherbot-app.com",
    "",
    "🔐 SecureVault - Password Manager",
    "   Tech: Electron, Rust, SQLCipher",
    "   • End-to-end encryption for password storage",
    "   • Biometric authentication support",
    "   Link: https://github.com/alexchen/securevault",
];

pub const SKILLS: &[&str] = &[
    "Technical Skills",
    "───────────────",
    "",
    "💻 Programming Languages:",
    "   JavaScript/TypeScript  ████████████████████ 95%",
    "   Python                ██████████████████   90%",
    "   Java                  ████████████████     80%",
    "   Go                    ██████████████       70%",
    "   Rust                  ████████             40%",
    "",
    "⚛️  Frontend Technologies:",
    "   React/Next.js         ████████████████████ 95%",
    "   Vue.js               ██████████████████   90%",
    "   Angular              ████████████████     80%",
    "   Svelte               ██████████           50%",
    "",
    "🔧 Backend Technologies:",
    "   Node.js              ████████████████████ 95%",
    "   Express/Fastify      ████████████████████ 95%",
    "   Django/Flask         ██████████████████   90%",
    "   Spring Boot          ████████████████     80%",
    "",
    "🗄️  Databases:",
    "   PostgreSQL           ████████████████████ 95%",
    "   MongoDB              ██████████████████   90%",
    "   Redis                ████████████████     80%",
    "   MySQL                ████████████████     80%",
    "",
    "☁️  Cloud & DevOps:",
    "   AWS                  ██████████████████   90%",
    "   Docker               ██████████████████   90%",
    "   Kubernetes           ██████████████       70%",
    "   GitHub Actions       ████████████████     80%",
];

pub const CONTACT: &[&str] = &[
    "Contact Information",
    "──────────────────",
    "",
    "📧 Email: alex.chen.dev@gmail.com",
    "🐙 GitHub: https://github.com/alexchen",
    "💼 LinkedIn: https://linkedin.com/in/alexchen-dev",
    "🐦 Twitter: @alexchen_dev",
    "📱 Phone: +1 (555) 123-4567",
    "",
    "📍 Location: San Francisco, CA",
    "🌐 Website: https://alexchen.dev",
    "",
    "Feel free to reach out for collaborations, job opportunities,",
    "or just to say hello! I'm always open to interesting conversations.",
];

pub const RESUME: &[&str] = &[
    "Resume Download",
    "──────────────",
    "",
    "📄 Downloading resume...",
    "✅ Resume downloaded successfully!",
    "",
    "File: Alex_Chen_Resume.pdf",
    "Size: 245 KB",
    "",
    "Direct link: https://alexchen.dev/resume.pdf",
];

pub const WHOAMI: &str =
    "alex@portfolio:~$ Full-Stack Developer | Problem Solver | Coffee Enthusiast";

/// Lines seeded into a fresh transcript.
pub fn welcome_banner() -> Vec<String> {
    vec![WELCOME.to_string(), HINT.to_string(), String::new()]
}

pub fn block(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
