use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// structs and types

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// the template parameters that the email template expects
//
// the relay templates in the wild use a handful of different names for the same
// fields, so the sender name and address are duplicated under the common aliases
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub user_name: String,
    pub to_name: String,
    pub from_email: String,
    pub email: String,
    pub reply_to: String,
    pub message: String,
}

impl TemplateParams {
    pub fn new(name: &str, email: &str, message: &str, recipient: &str) -> Self {
        TemplateParams {
            from_name: name.to_owned(),
            user_name: name.to_owned(),
            to_name: recipient.to_owned(),
            from_email: email.to_owned(),
            email: email.to_owned(),
            reply_to: email.to_owned(),
            message: message.to_owned(),
        }
    }
}

// messages

// send an email through the relay
//
// the public key travels as user_id, which is what the relay's REST endpoint calls it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SendEmailReq {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

// the relay answers with a bare "OK" body, so there is nothing to decode beyond the status
#[derive(Clone, Debug, PartialEq)]
pub struct SendEmailResp {
    pub status: u16,
}

// Relay
//
// the one outbound call the site makes.  this is a trait so that the submission flow
// can be driven without a browser; the futures from gloo-net are not Send, hence ?Send
#[async_trait(?Send)]
pub trait Relay {
    async fn send_email(&self, req: &SendEmailReq) -> anyhow::Result<SendEmailResp>;
}

#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        EmailJsRelay {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        EmailJsRelay::new(EMAILJS_SEND_URL)
    }
}

#[async_trait(?Send)]
impl Relay for EmailJsRelay {
    async fn send_email(&self, req: &SendEmailReq) -> anyhow::Result<SendEmailResp> {
        let resp = gloo_net::http::Request::post(self.endpoint.as_str())
            .json(req)?
            .send()
            .await?;

        if resp.ok() {
            Ok(SendEmailResp {
                status: resp.status(),
            })
        } else {
            Err(anyhow::Error::msg(format!(
                "relay returned {}: {}",
                resp.status(),
                resp.text().await?
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn template_params_fill_every_alias() {
        let params = TemplateParams::new("Ada", "ada@example.com", "hello", "Site Owner");

        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.user_name, "Ada");
        assert_eq!(params.to_name, "Site Owner");
        assert_eq!(params.from_email, "ada@example.com");
        assert_eq!(params.email, "ada@example.com");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.message, "hello");
    }

    #[test]
    fn send_request_matches_relay_body() {
        let req = SendEmailReq {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            user_id: "key_z".into(),
            template_params: TemplateParams::new("Ada", "ada@example.com", "hi", "Owner"),
        };

        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "from_name": "Ada",
                    "user_name": "Ada",
                    "to_name": "Owner",
                    "from_email": "ada@example.com",
                    "email": "ada@example.com",
                    "reply_to": "ada@example.com",
                    "message": "hi",
                }
            })
        );
    }

    #[test]
    fn default_relay_targets_emailjs() {
        assert_eq!(EmailJsRelay::default().endpoint(), EMAILJS_SEND_URL);
    }
}
