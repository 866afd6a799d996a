//! Portfolio copy shown in the info panel

pub struct DeskObject {
    pub id: &'static str,
    pub position: [f32; 3],
    pub title: &'static str,
    pub content: &'static str,
}

pub const DEV_DESK: [DeskObject; 3] = [
    DeskObject {
        id: "laptop",
        position: [-5.0, 1.0, -7.0],
        title: "Frontend Development",
        content: "Specializing in modern frontend frameworks like React, Vue.js, and Angular. \
                  Building responsive UIs with clean, maintainable code.",
    },
    DeskObject {
        id: "server",
        position: [5.0, 1.0, -7.0],
        title: "Backend Development",
        content: "Creating robust backend systems with Node.js, Express, Python/Django, and \
                  database expertise in SQL and NoSQL solutions.",
    },
    DeskObject {
        id: "codeBlock",
        position: [0.0, 1.0, -10.0],
        title: "Full Stack Development",
        content: "Integrating frontend and backend technologies to deliver complete web \
                  applications with optimal performance and user experience.",
    },
];

pub const ABOUT_TITLE: &str = "About Me";

pub const ABOUT_CONTENT: &str = "I work where technology meets product, turning complex ideas \
    into practical software. My background spans AI-driven applications, web platforms and \
    developer tooling, with leadership roles in fintech and technology teams delivering \
    projects that improve efficiency, scale businesses and sharpen customer experience.";

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        id: "project1",
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform built with React, Node.js, and \
                      MongoDB. Features include user authentication, product search, cart \
                      management, and payment processing.",
    },
    Project {
        id: "project2",
        title: "Portfolio Dashboard",
        description: "Interactive dashboard for financial portfolio analysis. Built with D3.js \
                      for data visualization and React for UI components. Includes real-time \
                      data updates and historical performance tracking.",
    },
    Project {
        id: "project3",
        title: "Mobile Weather App",
        description: "Weather forecast application with location-based services. Developed \
                      with React Native for cross-platform compatibility. Features include \
                      7-day forecasts, weather alerts, and customizable settings.",
    },
];

pub struct Skill {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILLS: [Skill; 3] = [
    Skill {
        id: "frontend",
        title: "Frontend",
        description: "Building intuitive user interfaces and responsive web applications with \
                      modern JavaScript frameworks and tools.",
    },
    Skill {
        id: "backend",
        title: "Backend",
        description: "Developing robust server-side applications with focus on scalability, \
                      security, and performance.",
    },
    Skill {
        id: "devops",
        title: "DevOps",
        description: "Automating development workflows, deployment processes, and \
                      infrastructure management for efficient delivery.",
    },
];

pub struct ContactLink {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

pub const CONTACTS: [ContactLink; 4] = [
    ContactLink {
        id: "email",
        label: "Email",
        icon: "✉️",
        link: "mailto:your.email@example.com",
        description: "Reach out via email at your.email@example.com for project inquiries or \
                      collaborations.",
    },
    ContactLink {
        id: "github",
        label: "GitHub",
        icon: "🐙",
        link: "https://github.com/yourusername",
        description: "Check out my open-source projects and contributions on GitHub.",
    },
    ContactLink {
        id: "linkedin",
        label: "LinkedIn",
        icon: "🔗",
        link: "https://linkedin.com/in/yourusername",
        description: "Connect with me professionally on LinkedIn to discuss opportunities.",
    },
    ContactLink {
        id: "twitter",
        label: "Twitter",
        icon: "🐦",
        link: "https://twitter.com/yourusername",
        description: "Follow me on Twitter for updates on my latest projects and tech insights.",
    },
];

pub struct Experience {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        id: "lead",
        title: "Engineering Lead",
        company: "Northwind Labs",
        duration: "2021 - Present",
        description: "Leading a product team shipping AI-assisted web applications",
        technologies: &["TypeScript", "React", "Python", "Kubernetes"],
    },
    Experience {
        id: "senior",
        title: "Senior Full Stack Developer",
        company: "Ledgerline",
        duration: "2018 - 2021",
        description: "Built trading dashboards and payment services for a fintech platform",
        technologies: &["Node.js", "PostgreSQL", "D3.js", "AWS"],
    },
    Experience {
        id: "developer",
        title: "Web Developer",
        company: "Brightside Studio",
        duration: "2015 - 2018",
        description: "Delivered client websites and e-commerce storefronts",
        technologies: &["JavaScript", "PHP", "MySQL", "CSS/SASS"],
    },
];

pub struct Education {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EDUCATION: [Education; 2] = [
    Education {
        id: "msc",
        degree: "M.Sc. Computer Science",
        institution: "Technical University",
        duration: "2013 - 2015",
        description: "Focus on machine learning and distributed systems.",
        achievements: &["Thesis with distinction", "Teaching assistant for Algorithms"],
    },
    Education {
        id: "bsc",
        degree: "B.Sc. Software Engineering",
        institution: "City College",
        duration: "2009 - 2013",
        description: "Foundations in software design, databases and networking.",
        achievements: &["Dean's list", "Hackathon winner"],
    },
];

pub struct GalleryItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub position: [f32; 3],
}

pub const GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        id: "workspace",
        title: "Workspace",
        description: "The desk where most of these projects were built.",
        position: [-6.0, 2.0, -15.0],
    },
    GalleryItem {
        id: "conference",
        title: "Conference Talk",
        description: "Speaking about real-time dashboards at a regional web conference.",
        position: [-2.0, 2.0, -16.0],
    },
    GalleryItem {
        id: "hackathon",
        title: "Hackathon",
        description: "Forty-eight hours, one prototype and far too much coffee.",
        position: [2.0, 2.0, -16.0],
    },
    GalleryItem {
        id: "team",
        title: "Team Offsite",
        description: "Planning the next product cycle with the team.",
        position: [6.0, 2.0, -15.0],
    },
];

pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 6] = [
    BlogPost {
        id: "three-fiber",
        title: "Building 3D Portfolios",
        date: "2024-01-15",
        category: "Web",
        excerpt: "What it takes to turn a resume into a place you can walk around in.",
    },
    BlogPost {
        id: "state",
        title: "One Store to Rule Them",
        date: "2024-02-20",
        category: "Architecture",
        excerpt: "Sharing state between a render loop and a UI without tears.",
    },
    BlogPost {
        id: "easing",
        title: "Easing Curves in Practice",
        date: "2024-03-10",
        category: "Animation",
        excerpt: "Why power2.inOut is the default for camera moves.",
    },
    BlogPost {
        id: "wasm",
        title: "Shipping Rust to the Browser",
        date: "2024-04-05",
        category: "Rust",
        excerpt: "Notes from moving simulation code into WebAssembly.",
    },
    BlogPost {
        id: "testing",
        title: "Testing Frame Loops",
        date: "2024-05-12",
        category: "Testing",
        excerpt: "Deterministic input timelines make game logic testable.",
    },
    BlogPost {
        id: "audio",
        title: "Sound Without Annoyance",
        date: "2024-06-01",
        category: "UX",
        excerpt: "Respecting autoplay rules and the mute button.",
    },
];
