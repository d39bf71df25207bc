/// Cloud vendor a headline is inferred to be about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Azure,
    GoogleCloud,
    Other,
}

impl Provider {
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::GoogleCloud => "Google Cloud",
            Provider::Other => "Other",
        }
    }
}

/// Topical bucket a headline is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Kubernetes,
    Security,
    DevOps,
    CloudComputing,
}

impl Category {
    /// Display order of the filter bar.
    pub const ALL: [Category; 4] = [
        Category::CloudComputing,
        Category::DevOps,
        Category::Security,
        Category::Kubernetes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Kubernetes => "Kubernetes",
            Category::Security => "Security",
            Category::DevOps => "DevOps",
            Category::CloudComputing => "Cloud Computing",
        }
    }
}

// Ordered rule tables, evaluated first-match-wins against the lowercased
// title. The last-resort labels (Other / Cloud Computing) are the defaults
// below rather than rows here.
const PROVIDER_RULES: &[(&[&str], Provider)] = &[
    (&["aws", "amazon"], Provider::Aws),
    (&["azure", "microsoft"], Provider::Azure),
    (&["google cloud", "google", "gcp"], Provider::GoogleCloud),
];

const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["kubernetes", "k8s", "container"], Category::Kubernetes),
    (&["security", "vulnerability", "cve"], Category::Security),
    (&["devops", "ci/cd", "pipeline"], Category::DevOps),
];

fn match_first<T: Copy>(title: &str, rules: &[(&[&str], T)], default: T) -> T {
    let title = title.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, label)| *label)
        .unwrap_or(default)
}

/// Derive the provider for a headline. Total: every title maps to exactly
/// one provider.
pub fn provider_for(title: &str) -> Provider {
    match_first(title, PROVIDER_RULES, Provider::Other)
}

/// Derive the category for a headline. Total: every title maps to exactly
/// one category.
pub fn category_for(title: &str) -> Category {
    match_first(title, CATEGORY_RULES, Category::CloudComputing)
}
