//! Secret List Endpoints

use serde::{Deserialize, Serialize};

use super::post_form;
use crate::error::ApiError;

#[derive(Serialize)]
struct VerifyForm<'a> {
    list_name: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
}

/// `Ok(false)` means the server rejected the password
pub async fn verify_secret(list_name: &str, password: &str) -> Result<bool, ApiError> {
    let response = post_form("/secret/verify", &VerifyForm { list_name, password }).await?;
    let body: VerifyResponse = response.json().await?;
    Ok(body.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encoding() {
        let form = VerifyForm { list_name: "Tage buch", password: "a&b=c" };
        assert_eq!(
            serde_urlencoded::to_string(&form).unwrap(),
            "list_name=Tage+buch&password=a%26b%3Dc"
        );
    }

    #[test]
    fn test_missing_flag_is_failure() {
        let body: VerifyResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
    }
}
