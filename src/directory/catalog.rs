//! Skill catalog
//!
//! Static table of teachable skills grouped by category. Backs the
//! catalog view and skill search; profile skill lists are free-form and
//! are not restricted to catalog entries.

/// A named group of related skills
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    /// Category heading shown in the catalog view
    pub name: &'static str,
    /// Skills in display order
    pub skills: &'static [&'static str],
}

/// All catalog categories in display order
pub const CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        skills: &[
            "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "C", "Go", "Rust",
            "Swift", "Kotlin", "Scala", "Ruby", "PHP", "Perl", "R", "MATLAB", "Julia", "Dart",
            "Elixir", "Haskell", "Clojure", "Lua", "Assembly", "Bash", "PowerShell",
        ],
    },
    SkillCategory {
        name: "Web Development",
        skills: &[
            "HTML5", "CSS3", "SASS", "Bootstrap", "Tailwind CSS", "React", "Vue.js", "Angular",
            "Svelte", "Next.js", "Nuxt.js", "Gatsby", "Remix", "Node.js", "Express.js",
            "NestJS", "Django", "Flask", "FastAPI", "Ruby on Rails", "Laravel", "Spring Boot",
            "ASP.NET", "Phoenix", "Actix Web", "Rocket",
        ],
    },
    SkillCategory {
        name: "Mobile Development",
        skills: &[
            "React Native", "Flutter", "Xamarin", "Ionic", "NativeScript", "iOS Development",
            "Android Development", "SwiftUI", "UIKit", "Jetpack Compose",
            "Kotlin Multiplatform", "Progressive Web Apps",
        ],
    },
    SkillCategory {
        name: "Databases",
        skills: &[
            "MySQL", "PostgreSQL", "SQLite", "Microsoft SQL Server", "Oracle Database",
            "MariaDB", "MongoDB", "CouchDB", "Amazon DynamoDB", "Cassandra", "Redis",
            "Memcached", "Elasticsearch", "Neo4j", "InfluxDB", "TimescaleDB",
            "Firebase Firestore", "Supabase", "Prisma", "SQLAlchemy", "Hibernate",
        ],
    },
    SkillCategory {
        name: "Cloud Platforms",
        skills: &[
            "Amazon Web Services (AWS)", "Microsoft Azure", "Google Cloud Platform",
            "IBM Cloud", "DigitalOcean", "Linode", "Heroku", "Vercel", "Netlify", "Railway",
            "Render", "Fly.io", "Firebase", "AWS Lambda", "Azure Functions",
            "Cloudflare Workers",
        ],
    },
    SkillCategory {
        name: "DevOps & Infrastructure",
        skills: &[
            "Docker", "Kubernetes", "Jenkins", "GitLab CI/CD", "GitHub Actions", "CircleCI",
            "Azure DevOps", "Ansible", "Terraform", "Pulumi", "CloudFormation", "Vagrant",
            "Packer", "Consul", "Vault", "Prometheus", "Grafana", "ELK Stack", "Splunk",
            "Datadog", "Chef", "Puppet",
        ],
    },
    SkillCategory {
        name: "Data Science & Analytics",
        skills: &[
            "Machine Learning", "Deep Learning", "Natural Language Processing",
            "Computer Vision", "Data Analysis", "Statistical Analysis", "Predictive Modeling",
            "Time Series Analysis", "A/B Testing", "Data Visualization",
            "Business Intelligence", "ETL Processes", "TensorFlow", "PyTorch", "Scikit-learn",
            "Keras", "Pandas", "NumPy", "Matplotlib", "Tableau", "Power BI", "Apache Spark",
            "Apache Kafka", "Apache Airflow", "Jupyter Notebooks", "MLflow",
        ],
    },
    SkillCategory {
        name: "Cybersecurity",
        skills: &[
            "Penetration Testing", "Vulnerability Assessment", "Network Security",
            "Web Security", "Mobile Security", "Cloud Security", "Incident Response",
            "Digital Forensics", "Malware Analysis", "Reverse Engineering", "Cryptography",
            "SIEM", "Threat Intelligence", "Risk Assessment", "Ethical Hacking", "Bug Bounty",
            "Security Auditing", "Wireshark", "Metasploit", "Burp Suite", "Nmap", "OWASP",
            "Kali Linux",
        ],
    },
    SkillCategory {
        name: "Game Development",
        skills: &[
            "Unity", "Unreal Engine", "Godot", "GameMaker Studio", "Phaser", "Three.js",
            "OpenGL", "Vulkan", "WebGL", "Game Design", "Level Design", "3D Modeling",
            "Animation", "Shader Programming", "Physics Simulation", "AI for Games",
            "Multiplayer Networking",
        ],
    },
    SkillCategory {
        name: "AI & Machine Learning",
        skills: &[
            "Artificial Intelligence", "Machine Learning", "Deep Learning", "Neural Networks",
            "Transformers", "Generative AI", "Large Language Models", "Computer Vision",
            "Natural Language Processing", "Reinforcement Learning", "Transfer Learning",
            "AutoML", "MLOps", "Model Deployment", "Hugging Face", "LangChain",
            "Vector Databases", "Embeddings", "Fine-tuning", "Prompt Engineering",
        ],
    },
    SkillCategory {
        name: "Blockchain & Web3",
        skills: &[
            "Blockchain Development", "Smart Contracts", "Solidity", "Ethereum", "Bitcoin",
            "Web3.js", "Ethers.js", "Truffle", "Hardhat", "DeFi", "NFTs", "DAOs",
            "Cryptocurrency", "Polygon", "Chainlink", "IPFS", "Hyperledger Fabric",
        ],
    },
    SkillCategory {
        name: "Testing & QA",
        skills: &[
            "Unit Testing", "Integration Testing", "End-to-End Testing", "Performance Testing",
            "Load Testing", "Security Testing", "Accessibility Testing", "Manual Testing",
            "Test Automation", "Selenium", "Cypress", "Playwright", "Jest", "Mocha", "JUnit",
            "PyTest", "Postman", "JMeter",
        ],
    },
    SkillCategory {
        name: "System Administration",
        skills: &[
            "Linux Administration", "Windows Server", "Network Administration",
            "DNS Management", "Active Directory", "LDAP", "Virtualization", "VMware",
            "Proxmox", "Storage Management", "Backup Solutions", "Disaster Recovery",
            "Monitoring", "Log Management", "Shell Scripting", "Certificate Management",
            "VPN Setup",
        ],
    },
    SkillCategory {
        name: "Design & UX",
        skills: &[
            "UI/UX Design", "User Research", "Wireframing", "Prototyping", "User Testing",
            "Information Architecture", "Interaction Design", "Visual Design",
            "Design Systems", "Accessibility Design", "Responsive Design", "Design Thinking",
            "Adobe Creative Suite", "Figma", "Sketch", "Adobe XD", "Framer", "Balsamiq",
            "Canva", "GIMP", "Inkscape",
        ],
    },
    SkillCategory {
        name: "Project Management",
        skills: &[
            "Agile Methodology", "Scrum", "Kanban", "Lean", "Waterfall", "DevOps", "GitOps",
            "Project Management", "Product Management", "Requirements Analysis",
            "Risk Management", "Team Leadership", "Technical Writing", "Documentation",
            "Jira", "Confluence", "Trello", "Notion",
        ],
    },
    SkillCategory {
        name: "Emerging Technologies",
        skills: &[
            "Internet of Things (IoT)", "Edge Computing", "Quantum Computing",
            "Augmented Reality", "Virtual Reality", "Mixed Reality", "Robotics", "Automation",
            "Digital Twins", "Microservices", "Serverless Architecture",
            "Event-Driven Architecture", "API Design", "GraphQL", "gRPC", "WebAssembly",
            "Progressive Web Apps", "Headless CMS", "JAMstack", "Voice Interfaces",
        ],
    },
];

/// Every catalog skill, sorted and de-duplicated
///
/// A few skills appear in more than one category (e.g. "Machine Learning"
/// under both Data Science and AI); the combined list carries each once.
pub fn all_skills() -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = CATEGORIES
        .iter()
        .flat_map(|category| category.skills.iter().copied())
        .collect();
    skills.sort_unstable();
    skills.dedup();
    skills
}

/// Case-insensitive substring search across the whole catalog
///
/// A blank query returns no matches (the catalog view treats that as
/// "no search active").
pub fn search(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    all_skills()
        .into_iter()
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .collect()
}

/// Total number of distinct skills in the catalog
pub fn skill_count() -> usize {
    all_skills().len()
}
