//! PIX confirmation payload.

use serde::{Deserialize, Serialize};

/// Payment details returned by `GET /pix`.
///
/// The wire names are the backend's Portuguese field names; the amount is
/// kept as the decimal string the backend sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixInfo {
    /// The PIX key payments are sent to.
    #[serde(rename = "chave_pix")]
    pub key: String,

    /// Amount to pay, as a decimal string (e.g. `"0.01"`).
    #[serde(rename = "valor")]
    pub amount: String,

    /// The "copia e cola" payment code the user pastes into their bank app.
    #[serde(rename = "codigo_copia_cola")]
    pub copy_paste_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let info: PixInfo = serde_json::from_str(
            r#"{
                "chave_pix": "+5511999999999",
                "valor": "0.01",
                "codigo_copia_cola": "Simulado PIX: Chave +5511999999999 | Valor R$0.01"
            }"#,
        )
        .unwrap();

        assert_eq!(info.key, "+5511999999999");
        assert_eq!(info.amount, "0.01");
        assert!(info.copy_paste_code.starts_with("Simulado PIX"));
    }

    #[test]
    fn missing_field_is_an_error() {
        let result: Result<PixInfo, _> =
            serde_json::from_str(r#"{"chave_pix": "k", "valor": "1.00"}"#);
        assert!(result.is_err());
    }
}
