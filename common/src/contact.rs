use std::fmt;

use api::relay::{Relay, SendEmailReq, TemplateParams};
use thiserror::Error;
use tracing::{error, info, instrument, Level};

use crate::config::RelayConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(Field),
    #[error("email relay is not configured")]
    Configuration,
    #[error("email relay call failed: {0}")]
    Submission(String),
}

// the three inputs of the contact form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

// build the relay request, or refuse if the relay ids are not all present
pub fn relay_request(form: &ContactForm, config: &RelayConfig) -> Result<SendEmailReq, ContactError> {
    let (service_id, template_id, public_key) = config.credentials().ok_or(ContactError::Configuration)?;

    Ok(SendEmailReq {
        service_id: service_id.to_owned(),
        template_id: template_id.to_owned(),
        user_id: public_key.to_owned(),
        template_params: TemplateParams::new(&form.name, &form.email, &form.message, &config.recipient),
    })
}

// submit the form through the relay
//
// fields are checked first, then the relay configuration; either failure returns
// before anything goes over the network.  the form is only cleared once the relay
// has accepted the message, so a failed attempt can be retried as-is
#[instrument(level = Level::DEBUG, skip_all)]
pub async fn submit<R>(form: &mut ContactForm, config: &RelayConfig, relay: &R) -> Result<(), ContactError>
where
    R: Relay + ?Sized,
{
    form.validate()?;

    let req = relay_request(form, config).inspect_err(|_| error!("email relay ids are missing from the site config"))?;

    match relay.send_email(&req).await {
        Ok(resp) => {
            info!(status = resp.status, "contact message relayed");
            form.clear();
            Ok(())
        }
        Err(err) => {
            error!("email relay error: {err}");
            Err(ContactError::Submission(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::relay::SendEmailResp;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeRelay {
        fail: bool,
        calls: RefCell<Vec<SendEmailReq>>,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            FakeRelay {
                fail,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Relay for FakeRelay {
        async fn send_email(&self, req: &SendEmailReq) -> anyhow::Result<SendEmailResp> {
            self.calls.borrow_mut().push(req.clone());
            if self.fail {
                Err(anyhow::Error::msg("503 service unavailable"))
            } else {
                Ok(SendEmailResp { status: 200 })
            }
        }
    }

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: Some("service_1".into()),
            template_id: Some("template_1".into()),
            public_key: Some("public_1".into()),
            recipient: "Site Owner".into(),
            ..RelayConfig::default()
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn empty_field_never_reaches_the_relay() {
        let relay = FakeRelay::new(false);

        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, "   ".into());

            let result = block_on(submit(&mut form, &configured(), &relay));

            assert_eq!(result, Err(ContactError::MissingField(field)));
        }
        assert!(relay.calls.borrow().is_empty());
    }

    #[test]
    fn missing_config_aborts_before_the_call() {
        let relay = FakeRelay::new(false);
        let mut form = filled();
        let config = RelayConfig {
            template_id: None,
            ..configured()
        };

        let result = block_on(submit(&mut form, &config, &relay));

        assert_eq!(result, Err(ContactError::Configuration));
        assert!(relay.calls.borrow().is_empty());
        assert_eq!(form, filled());
    }

    #[test]
    fn success_sends_once_and_clears() {
        let relay = FakeRelay::new(false);
        let mut form = filled();

        block_on(submit(&mut form, &configured(), &relay)).unwrap();

        let calls = relay.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service_id, "service_1");
        assert_eq!(calls[0].template_id, "template_1");
        assert_eq!(calls[0].user_id, "public_1");
        assert_eq!(
            calls[0].template_params,
            TemplateParams::new("Ada", "ada@example.com", "Hello there", "Site Owner")
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_keeps_the_form() {
        let relay = FakeRelay::new(true);
        let mut form = filled();

        let result = block_on(submit(&mut form, &configured(), &relay));

        assert!(matches!(result, Err(ContactError::Submission(msg)) if msg.contains("503")));
        assert_eq!(relay.calls.borrow().len(), 1);
        assert_eq!(form, filled());
    }
}
