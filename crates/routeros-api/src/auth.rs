use secrecy::SecretString;

/// Username and password sent as HTTP basic auth on every request.
///
/// The password stays wrapped in [`SecretString`], so `Debug` output and
/// logs never show it.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("admin", SecretString::from("hunter2"));
        let shown = format!("{creds:?}");
        assert!(shown.contains("admin"));
        assert!(!shown.contains("hunter2"));
        assert_eq!(creds.password().expose_secret(), "hunter2");
    }
}
