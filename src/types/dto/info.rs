use poem_openapi::Object;

pub const CONTACT_NAME: &str = "heriberto";
pub const CONTACT_PHONE_NUMBER: &str = "312123xxxx";

/// Fixed contact record served by the info endpoint
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub phone_number: String,
}

impl ContactInfo {
    pub fn fixed() -> Self {
        Self {
            name: CONTACT_NAME.to_string(),
            phone_number: CONTACT_PHONE_NUMBER.to_string(),
        }
    }
}
