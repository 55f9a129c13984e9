use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    access_token: String,
}

impl User {
    pub(crate) fn new(id: Uuid, email: String, access_token: String) -> Self {
        User {
            id,
            email,
            access_token,
        }
    }
}

pub trait UserLike {
    fn access_token(&self) -> &str;
}

impl UserLike for User {
    fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// A bearer token that does not belong to a registered user.
pub struct Token(pub String);

impl UserLike for Token {
    fn access_token(&self) -> &str {
        &self.0
    }
}
