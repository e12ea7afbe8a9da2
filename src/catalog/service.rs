// 📸 Service Item - flat-priced add-ons (photography, decor, makeup...)
//
// `category` groups services for display and labels their breakdown line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,

    /// Grouping key (e.g., "Photography", "Decorations")
    pub category: String,

    pub name: String,
    pub description: String,

    /// Flat cost of the package
    pub price: u64,

    /// Package tier label (e.g., "Basic", "Standard", "Premium")
    pub package_type: String,
}

impl ServiceItem {
    pub fn new(
        id: &str,
        category: &str,
        name: &str,
        description: &str,
        price: u64,
        package_type: &str,
    ) -> Self {
        ServiceItem {
            id: id.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            package_type: package_type.to_string(),
        }
    }
}

/// Group services by category, keeping catalog order inside each group
pub fn group_by_category(services: &[ServiceItem]) -> BTreeMap<String, Vec<ServiceItem>> {
    let mut grouped: BTreeMap<String, Vec<ServiceItem>> = BTreeMap::new();

    for service in services {
        grouped
            .entry(service.category.clone())
            .or_default()
            .push(service.clone());
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_category() {
        let services = vec![
            ServiceItem::new("s1", "Photography", "Basic", "6 hours", 30000, "Basic"),
            ServiceItem::new("s3", "Decorations", "Floral", "Flowers", 40000, "Basic"),
            ServiceItem::new("s2", "Photography", "Premium", "Photo + Video", 80000, "Premium"),
        ];

        let grouped = group_by_category(&services);

        assert_eq!(grouped.len(), 2);

        let photo_ids: Vec<&str> = grouped["Photography"].iter().map(|s| s.id.as_str()).collect();
        assert_eq!(photo_ids, vec!["s1", "s2"], "Catalog order kept within a group");
        assert_eq!(grouped["Decorations"].len(), 1);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_category(&[]).is_empty());
    }
}
