use common::model::dataset::Dataset;
use common::model::team::Team;

/// Read-only team and dataset registries.
///
/// Built once in `main` and injected into handlers as `web::Data`; nothing
/// mutates it after startup. Here the registries are hardcoded where a real
/// deployment would load them from a control store.
pub struct Catalog {
    pub teams: Vec<Team>,
    pub datasets: Vec<Dataset>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            teams: vec![
                Team::new(1, "RPO", "abcd123EFGH"),
                Team::new(2, "b&w", "ijkl456MNOP"),
                Team::new(3, "Third", "qrst789UVWX"),
            ],
            datasets: vec![
                Dataset::new(1, "wade", vec![1, 2, 3]),
                Dataset::new(2, "james", vec![]),
                Dataset::new(3, "helen", vec![1, 3, 4]),
                Dataset::new(4, "peter", vec![1, 2, 4]),
                Dataset::new(5, "valentine", vec![]),
                Dataset::new(6, "andrew", vec![2, 3, 4]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_keys_are_unique() {
        let catalog = Catalog::builtin();
        for (i, team) in catalog.teams.iter().enumerate() {
            for other in &catalog.teams[i + 1..] {
                assert_ne!(team.write_key, other.write_key);
            }
        }
    }

    #[test]
    fn dataset_names_are_unique() {
        let catalog = Catalog::builtin();
        for (i, dataset) in catalog.datasets.iter().enumerate() {
            for other in &catalog.datasets[i + 1..] {
                assert_ne!(dataset.name, other.name);
            }
        }
    }

    #[test]
    fn some_datasets_have_no_partitions() {
        // "james" and "valentine" are deliberately unassignable.
        let catalog = Catalog::builtin();
        let james = catalog.datasets.iter().find(|d| d.name == "james").unwrap();
        assert!(james.partition_list.is_empty());
    }
}
