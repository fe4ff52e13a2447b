use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;

/// Update field for a nullable column: absent leaves the column alone,
/// `null` clears it, a value sets it.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
