use super::entities::{
    About, BlogPost, Education, Experience, Profile, Project, Skill, SkillCategory, SocialLinks,
};

/// Content compiled into the binary. Served whenever the backing store is
/// unconfigured, unreachable, or empty for a given slice, and used to seed a
/// fresh database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultContentBundle {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
}

impl DefaultContentBundle {
    pub fn builtin() -> Self {
        Self {
            profile: default_profile(),
            projects: default_projects(),
            blog_posts: default_blog_posts(),
        }
    }

    pub fn skills(&self) -> &[Skill] {
        self.profile.skills.as_deref().unwrap_or_default()
    }
}

impl Default for DefaultContentBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

fn default_profile() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        role: "Full Stack Developer".to_string(),
        title: "Building fast, accessible products for the web".to_string(),
        email: "hello@alexmorgan.dev".to_string(),
        location: Some("Remote".to_string()),
        social: SocialLinks {
            github: Some("https://github.com/".to_string()),
            linkedin: Some("https://linkedin.com/".to_string()),
            twitter: Some("https://twitter.com/".to_string()),
        },
        about: About {
            summary: "I design and ship web applications end to end, from data model to pixel."
                .to_string(),
            description: vec![
                "I have spent the last several years building dashboards, internal tools and \
                 consumer products with React, TypeScript and Node.js."
                    .to_string(),
                "Lately I focus on performance, accessibility and developer experience, and I \
                 enjoy turning rough ideas into maintainable systems."
                    .to_string(),
            ],
        },
        experience: vec![
            Experience {
                company: "Brightline Labs".to_string(),
                role: "Senior Frontend Engineer".to_string(),
                period: "2021 - Present".to_string(),
            },
            Experience {
                company: "Northwind Digital".to_string(),
                role: "Full Stack Developer".to_string(),
                period: "2018 - 2021".to_string(),
            },
        ],
        education: vec![Education {
            school: "State University".to_string(),
            degree: "B.Sc. Computer Science".to_string(),
            year: Some("2018".to_string()),
        }],
        skills: Some(default_skills()),
        currently_learning: Some(vec![
            "Rust".to_string(),
            "WebAssembly".to_string(),
            "Edge computing".to_string(),
        ]),
    }
}

fn default_skills() -> Vec<Skill> {
    let skill = |name: &str, icon: &str, category| Skill {
        name: name.to_string(),
        icon: icon.to_string(),
        category,
    };

    vec![
        skill("React / Next.js", "Code2", SkillCategory::Frontend),
        skill("TypeScript", "Terminal", SkillCategory::Frontend),
        skill("Tailwind CSS", "Layout", SkillCategory::Frontend),
        skill("Node.js", "Database", SkillCategory::Backend),
        skill("GraphQL", "Globe", SkillCategory::Backend),
        skill("PostgreSQL", "Database", SkillCategory::Backend),
        skill("Docker", "Cpu", SkillCategory::Tools),
        skill("Git / CI/CD", "GitBranch", SkillCategory::Tools),
        skill("Mobile First", "Smartphone", SkillCategory::Frontend),
    ]
}

fn default_projects() -> Vec<Project> {
    let project = |id: i64, title: &str, description: &str, tags: &[&str]| Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        long_description: None,
        image: format!("https://picsum.photos/800/600?random={id}"),
        gallery: Vec::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        features: Vec::new(),
        demo_url: "#".to_string(),
        github_url: "#".to_string(),
        case_study_url: None,
    };

    vec![
        project(
            1,
            "E-Commerce Dashboard",
            "A comprehensive analytics dashboard for online retailers featuring real-time data \
             visualization and inventory management.",
            &["React", "TypeScript", "D3.js", "Tailwind"],
        ),
        project(
            2,
            "AI Task Manager",
            "Smart task prioritization tool utilizing Gemini API to categorize and schedule \
             daily engineering tasks automatically.",
            &["Next.js", "Gemini API", "Prisma", "PostgreSQL"],
        ),
        project(
            3,
            "Crypto Portfolio Tracker",
            "Real-time cryptocurrency tracking application with price alerts and portfolio \
             performance charts.",
            &["React Native", "Redux", "Node.js", "WebSockets"],
        ),
        project(
            4,
            "Social Media Scheduler",
            "A platform to schedule and automate posts across Twitter, LinkedIn, and Instagram \
             with built-in image editor.",
            &["Vue.js", "Firebase", "Cloud Functions"],
        ),
    ]
}

fn default_blog_posts() -> Vec<BlogPost> {
    let post = |id: i64, title: &str, excerpt: &str, date: &str, read_time: &str, slug: &str| {
        BlogPost {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            slug: slug.to_string(),
            link: None,
        }
    };

    vec![
        post(
            1,
            "Mastering React Server Components",
            "A deep dive into the architecture of RSC and how it changes the way we build \
             modern web applications.",
            "Oct 12, 2023",
            "5 min read",
            "react-server-components",
        ),
        post(
            2,
            "The Future of CSS: Tailwind vs. CSS-in-JS",
            "Analyzing the performance and developer experience trade-offs between \
             utility-first CSS and styled-components.",
            "Nov 03, 2023",
            "4 min read",
            "tailwind-vs-css-in-js",
        ),
        post(
            3,
            "Optimizing Web Performance in 2024",
            "Key strategies for improving Core Web Vitals, from image optimization to code \
             splitting strategies.",
            "Dec 15, 2023",
            "7 min read",
            "web-performance-2024",
        ),
    ]
}
