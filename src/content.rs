/// Static content for the rendered page. The defaults ship a complete
/// sample portfolio; edit them (or the template) to rebrand the site.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub intro: String,
    pub about: Vec<String>,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl SiteContent {
    /// Initials shown in the about-section badge.
    pub fn monogram(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent {
            first_name: "Sam".to_string(),
            last_name: "Carter".to_string(),
            tagline: "A Full-Stack Developer".to_string(),
            intro: "Full-stack developer building fast, reliable web applications \
                    with a focus on clean interfaces and solid backends."
                .to_string(),
            about: vec![
                "I am a full-stack developer with hands-on experience building \
                 modern, responsive web applications from the database up to the \
                 last CSS transition."
                    .to_string(),
                "I care about performance, small dependable services, and \
                 interfaces that stay out of the user's way."
                    .to_string(),
                "I love shipping meaningful products and continuously learning \
                 new technologies."
                    .to_string(),
            ],
            highlights: vec![
                "Web application specialist".to_string(),
                "API design and integrations".to_string(),
                "Performance and UI engineering".to_string(),
            ],
            skills: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "TypeScript".to_string(),
                "React".to_string(),
                "Rust".to_string(),
                "Axum".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
                "Git".to_string(),
                "Linux".to_string(),
                "CI/CD".to_string(),
            ],
            projects: vec![
                Project {
                    title: "Headless CMS Storefront".to_string(),
                    description: "Built a fully dynamic storefront with a headless \
                                  CMS backend: reusable components, SEO-friendly \
                                  rendering, and a responsive UI."
                        .to_string(),
                    image_url: "/static/img/project-storefront.svg".to_string(),
                    tech: vec![
                        "React".to_string(),
                        "CMS".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                    github_url: "#".to_string(),
                    demo_url: "#".to_string(),
                },
                Project {
                    title: "Authentication Service".to_string(),
                    description: "Developed an authentication service with token \
                                  rotation, password reset, and account management."
                        .to_string(),
                    image_url: "/static/img/project-auth.svg".to_string(),
                    tech: vec![
                        "Rust".to_string(),
                        "Axum".to_string(),
                        "JWT".to_string(),
                    ],
                    github_url: "#".to_string(),
                    demo_url: "#".to_string(),
                },
                Project {
                    title: "Error Tracking Integration".to_string(),
                    description: "Integrated real-time error tracking, end-to-end \
                                  testing, and push notifications into an existing \
                                  product."
                        .to_string(),
                    image_url: "/static/img/project-tracking.svg".to_string(),
                    tech: vec![
                        "Sentry".to_string(),
                        "Cypress".to_string(),
                        "React".to_string(),
                    ],
                    github_url: "#".to_string(),
                    demo_url: "#".to_string(),
                },
            ],
            email: "hello@example.com".to_string(),
            github_url: "https://github.com/samcarter".to_string(),
            linkedin_url: "https://www.linkedin.com/in/samcarter".to_string(),
        }
    }
}
