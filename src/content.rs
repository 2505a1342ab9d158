//! Static portfolio content: profile, skills, projects and radar data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub tagline: &'static str,
    pub links: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillSection {
    pub id: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub story: &'static str,
    pub tech: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub github: Option<&'static str>,
    pub notebook: Option<&'static str>,
    pub live_site: Option<&'static str>,
}

impl Project {
    /// Link copied to the clipboard for this project
    #[must_use]
    pub fn primary_link(&self) -> Option<&'static str> {
        self.live_site.or(self.github).or(self.notebook)
    }
}

/// One axis of the skills radar, value in percent
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarSkill {
    pub skill: &'static str,
    pub value: f64,
}

pub const PROFILE: Profile = Profile {
    name: "Deepak Lekhak",
    handle: "lekhak",
    tagline: "Backend Developer | Machine Learning Dabbler | Coffee Enthusiast",
    links: &[
        SocialLink {
            label: "github",
            url: "https://github.com/lekhak03",
        },
        SocialLink {
            label: "linkedin",
            url: "https://www.linkedin.com/in/dlekhak/",
        },
        SocialLink {
            label: "resume",
            url: "/Deep-lekhak-resume.pdf",
        },
    ],
};

pub const SKILL_SECTIONS: &[SkillSection] = &[
    SkillSection {
        id: "languages",
        title: "Languages",
        skills: &["Python", "JavaScript", "Java", "C++", "C", "SQL", "HTML/CSS"],
    },
    SkillSection {
        id: "interests",
        title: "Interests",
        skills: &[
            "Machine Learning",
            "System Architecture",
            "Backend Development",
            "Game Development",
        ],
    },
    SkillSection {
        id: "tooling",
        title: "Tools and Frameworks",
        skills: &[
            "Git",
            "Node.js",
            "React",
            "VS Code",
            "Docker",
            "AWS",
            "MongoDB",
            "NumPy",
            "TensorFlow",
        ],
    },
];

pub const STORIES_TITLE: &str = "Data Stories";
pub const STORIES_BLURB: &str = "Where numbers meet narratives. I transform complex datasets into \
    compelling stories that drive decisions, reveal insights, and spark innovation.";
pub const STORIES_QUOTE: &str = "\"Numbers have an important story to tell. They rely on you to \
    give them a clear and convincing voice\" - Stephen Few";

pub const TOOL_ARSENAL: &[SkillSection] = &[
    SkillSection {
        id: "machine-learning",
        title: "Machine Learning",
        skills: &["Scikit-learn", "TensorFlow", "PyTorch", "PyCaret", "Hugging Face"],
    },
    SkillSection {
        id: "data-visualization",
        title: "Data Visualization",
        skills: &["D3.js", "Plotly", "Matplotlib", "Seaborn", "Tableau"],
    },
    SkillSection {
        id: "data-processing",
        title: "Data Processing",
        skills: &["Pandas", "NumPy", "Apache Spark", "Dask", "Polars"],
    },
    SkillSection {
        id: "databases",
        title: "Databases",
        skills: &["PostgreSQL", "MongoDB", "InfluxDB", "Redis", "BigQuery"],
    },
];

pub const RADAR: &[RadarSkill] = &[
    RadarSkill { skill: "Machine Learning", value: 85.0 },
    RadarSkill { skill: "Data Visualization", value: 90.0 },
    RadarSkill { skill: "Statistical Analysis", value: 80.0 },
    RadarSkill { skill: "Python/R", value: 95.0 },
    RadarSkill { skill: "SQL/Databases", value: 88.0 },
    RadarSkill { skill: "Big Data Tools", value: 75.0 },
    RadarSkill { skill: "Cloud Platforms", value: 82.0 },
    RadarSkill { skill: "Deep Learning", value: 78.0 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "churn-model",
        title: "Employee Churn Prediction",
        kind: "HR Analytics",
        description: "Built a high-accuracy machine learning system to predict employee attrition. \
            Leveraged feature engineering and model interpretation to uncover churn drivers, \
            enabling HR teams to take proactive action.",
        story: "What began as a churn model evolved into a data pipeline and dashboarding system \
            that revealed the human factors behind employee retention.",
        tech: &["Python", "PyCaret", "BigQuery", "Looker Studio"],
        metrics: &[
            Metric { label: "accuracy", value: "98.8%" },
            Metric { label: "auc", value: "0.99" },
            Metric { label: "records", value: "15K+" },
        ],
        github: Some("https://github.com/lekhak03/churn-model"),
        notebook: Some(
            "https://github.com/lekhak03/churn-model/blob/main/Pilot_Analysis_Employee_Churn.ipynb",
        ),
        live_site: None,
    },
    Project {
        id: "hr-dashboard",
        title: "HR Analytics Dashboard",
        kind: "Workforce Insights",
        description: "Designed an interactive Power BI dashboard to uncover absenteeism patterns \
            across employees, categories, and seasons. Delivered actionable insights for HR to \
            improve workload balance, wellness programs, and policy planning.",
        story: "What started as a data visualization exercise became a comprehensive HR \
            intelligence tool, revealing hidden trends in employee health and attendance.",
        tech: &["Power BI", "Data Visualization", "HR Analytics"],
        metrics: &[
            Metric { label: "cases", value: "740" },
            Metric { label: "hours", value: "5,124" },
            Metric { label: "top category", value: "765 hrs (Category 3)" },
        ],
        github: Some("https://github.com/lekhak03/powerBI-project/blob/main/workingHRProject.pdf"),
        notebook: None,
        live_site: None,
    },
    Project {
        id: "pundit-statbook",
        title: "Pundit StatBook",
        kind: "Sports Analytics",
        description: "Developed a football analytics dashboard with role-based insights for \
            Defenders, Midfielders, Forwards, and Goalkeepers. Integrated interactive radar \
            charts to visualize player and system performance with precision.",
        story: "What began as a simple stats viewer turned into a dynamic analytics platform, \
            blending football intelligence with sleek data visualization.",
        tech: &["Next.js", "TypeScript", "D3.js", "React"],
        metrics: &[
            Metric { label: "roles", value: "4" },
            Metric { label: "charts", value: "2+" },
            Metric { label: "performance", value: "Real-time SSR" },
        ],
        github: Some("https://github.com/lekhak03/pundit-statbook"),
        notebook: None,
        live_site: Some("https://pundit-statbook.vercel.app/"),
    },
    Project {
        id: "folium-maps",
        title: "Interactive Mapping with Folium",
        kind: "Geospatial Analytics",
        description: "Created dynamic geospatial visualizations using Folium, clustering \
            locations, customizing markers, and integrating geographic calculations to explore \
            spatial patterns.",
        story: "What began as a simple mapping exercise expanded into an exploration of how \
            interactive geospatial tools can reveal hidden patterns in data.",
        tech: &["Python", "Folium", "Pandas", "MarkerCluster"],
        metrics: &[
            Metric { label: "maps", value: "5+" },
            Metric { label: "clusters", value: "Marker-based" },
            Metric { label: "features", value: "Custom popups" },
        ],
        github: None,
        notebook: Some(
            "https://github.com/lekhak03/ibm-ds-certification/blob/main/folium_lab.ipynb",
        ),
        live_site: None,
    },
    Project {
        id: "classifier-comparison",
        title: "Comparing Classification Models",
        kind: "Machine Learning",
        description: "Evaluated multiple classification algorithms (Logistic Regression, KNN, \
            SVM, and Decision Trees) on a real dataset, comparing accuracy, precision, recall, \
            and F1-scores.",
        story: "A simple classification task grew into a comprehensive benchmark of machine \
            learning algorithms, providing insight into trade-offs across models.",
        tech: &["Python", "Scikit-learn", "Pandas", "Seaborn", "Matplotlib"],
        metrics: &[
            Metric { label: "models", value: "5+" },
            Metric { label: "best", value: "SVM/Random Forest" },
            Metric { label: "metrics", value: "Accuracy, F1, AUC" },
        ],
        github: None,
        notebook: Some(
            "https://github.com/lekhak03/ibm-ds-certification/blob/main/machine_learning_models.ipynb",
        ),
        live_site: None,
    },
    Project {
        id: "viz-showcase",
        title: "Data Visualization Showcase",
        kind: "Data Visualization",
        description: "Produced compelling plots using Matplotlib, Seaborn, and Folium to \
            highlight relationships, distributions, and geospatial insights from datasets.",
        story: "What started as practice with charting libraries became a storytelling \
            exercise, translating raw numbers into intuitive visual narratives.",
        tech: &["Python", "Matplotlib", "Seaborn", "Folium"],
        metrics: &[
            Metric { label: "plots", value: "10+" },
            Metric { label: "libraries", value: "3" },
            Metric { label: "insights", value: "Multi-domain" },
        ],
        github: None,
        notebook: Some(
            "https://github.com/lekhak03/ibm-ds-certification/blob/main/visualizations.ipynb",
        ),
        live_site: None,
    },
];

#[must_use]
pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[must_use]
pub fn skill_section(id: &str) -> Option<&'static SkillSection> {
    SKILL_SECTIONS.iter().find(|section| section.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<&str> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_project_has_a_link() {
        assert!(PROJECTS.iter().all(|project| project.primary_link().is_some()));
    }

    #[test]
    fn test_primary_link_prefers_live_site() {
        let statbook = project("pundit-statbook").map(Project::primary_link);
        assert_eq!(statbook, Some(Some("https://pundit-statbook.vercel.app/")));
    }

    #[test]
    fn test_radar_values_in_range() {
        assert!(RADAR.iter().all(|entry| (0.0..=100.0).contains(&entry.value)));
    }
}
