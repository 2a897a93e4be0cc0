use super::*;
use serde::Deserialize;
use serde::Serialize;
use shelf_core::Unique;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
}

impl From<RegisterRequest> for MemberDraft {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            address: req.address,
            phone: req.phone,
            password: req.password,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateRequest> for MemberPatch {
    fn from(req: UpdateRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            address: req.address,
            phone: req.phone,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().inner(),
            name: member.name().to_string(),
            email: member.email().to_string(),
            address: member.address().to_string(),
            phone: member.phone().to_string(),
        }
    }
}
