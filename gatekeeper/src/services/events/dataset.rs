use crate::catalog::Catalog;
use crate::services::events::error::EventError;
use common::model::dataset::Dataset;
use rand::seq::SliceRandom;

/// Looks a dataset up by the name taken from the URL path.
pub fn resolve_dataset<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Dataset, EventError> {
    catalog
        .datasets
        .iter()
        .find(|dataset| dataset.name == name)
        .ok_or(EventError::DatasetLookupFailure)
}

/// Picks one of the dataset's partitions uniformly at random. A dataset with
/// no partitions assigned cannot accept events.
pub fn choose_partition(dataset: &Dataset) -> Result<i32, EventError> {
    dataset
        .partition_list
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or(EventError::DatasetLookupFailure)
}
