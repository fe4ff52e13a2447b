use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub address: Option<Option<String>>,
}
