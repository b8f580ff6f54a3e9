//! Static profile content shown by the sections.

/// Greeting line at the top of the hero.
pub const GREETING: &str = "Hello, My Name is ROHINI C.";

pub const HEADLINE: &str = "Building Scalable Full Stack Web Apps with Modern Technologies";

pub const TAGLINES: [&str; 2] = [
    "Who said coding can't be fun?",
    "Let's build something awesome!",
];

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        glyph: "GH",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        glyph: "in",
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com",
        glyph: "</>",
    },
    SocialLink {
        label: "Email",
        href: "mailto:rohinic699@gmail.com",
        glyph: "@",
    },
];

pub const ABOUT_TITLE: &str = "Who Am I ?";
pub const ABOUT_NAME: &str = "Hello, I'm Rohini C";
pub const ABOUT_SUBTITLE: &str = "Transforming ideas into seamless digital experiences";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate MERN stack developer with one year of hands-on experience in building \
     personal projects and two months of internship experience. As a self-taught developer, I \
     have a strong foundation in creating scalable, high-performance applications. My journey \
     from a BSc in Chemistry to MERN-stack development reflects my adaptability and relentless \
     drive to master new technologies.",
    "Proficient in MongoDB, Express.js, React, and Node.js, I create seamless user experiences, \
     integrating secure payment systems, API functionalities, and cloud deployments. My projects \
     range from e-commerce platforms to gym management applications, focusing on performance, \
     security, and usability.",
];

pub const HIGHLIGHTS: [&str; 4] = [
    "Specialized in full-stack MERN development",
    "Proficient in RESTful API design & integration",
    "Experienced with AWS cloud deployments",
    "Focus on application security & performance",
];

/// One entry of the education or experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

/// Most recent first.
pub const EXPERIENCE: [TimelineEntry; 1] = [TimelineEntry {
    title: "MERN Stack Developer Intern",
    place: "Zm QR Code Services, Gundur",
    period: "Jan 2025 – Feb 2025",
    details: &[
        "Developed and maintained full-stack web applications using MERN stack technologies.",
        "Built responsive and user-friendly interfaces using React.js and Tailwind CSS.",
        "Created RESTful APIs and integrated third-party services.",
        "Collaborated with team members using Git for version control.",
    ],
}];

/// Most recent first.
pub const EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        title: "MERN Stack Development",
        place: "Brototype, Kochi",
        period: "Oct 2023 - Dec 2025",
        details: &[],
    },
    TimelineEntry {
        title: "BSc Chemistry",
        place: "Kerala University",
        period: "Aug 2020 - May 2023",
        details: &[],
    },
];

/// A titled list of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// Skill groups, laid out in rows of three.
pub const SKILL_GROUPS: [SkillGroup; 8] = [
    SkillGroup {
        title: "Frontend",
        skills: &["React", "JavaScript", "HTML5", "CSS", "Tailwind CSS", "EJS", "Figma"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Node.js", "Express.js", "TypeScript", "RESTful APIs", "WebSocket"],
    },
    SkillGroup {
        title: "Databases",
        skills: &["MongoDB", "PostgreSQL"],
    },
    SkillGroup {
        title: "Architecture",
        skills: &["MVC", "Microservices"],
    },
    SkillGroup {
        title: "DevOps",
        skills: &["AWS", "AWS EC2", "NGINX", "PM2"],
    },
    SkillGroup {
        title: "Development Tools",
        skills: &["VS Code", "Git", "GitHub", "npm", "Postman"],
    },
    SkillGroup {
        title: "Third-Party APIs",
        skills: &["Razorpay", "Google Auth", "Google Analytics", "JWT"],
    },
    SkillGroup {
        title: "Data Structures",
        skills: &[
            "Array",
            "String",
            "Linked List",
            "Stack",
            "Queue",
            "HashMap",
            "Trie",
            "Heap",
            "Tree",
            "Graph",
        ],
    },
];
