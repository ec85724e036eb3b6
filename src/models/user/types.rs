use serde::{Deserialize, Serialize};

pub const ROLE_CUSTOMER_SERVICE: &str = "customer_service";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Role {
    pub fn label(&self) -> String {
        role_label(&self.name)
    }
}

/// Human label for a role name: "customer_service" -> "Customer Service".
pub fn role_label(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A user as returned by the backend. The password is never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role_id: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub counter_id: Option<i64>,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl User {
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }

    pub fn role_label(&self) -> String {
        match &self.role {
            Some(role) => role.label(),
            None => "-".to_string(),
        }
    }

    /// `role_id` if present, else the id of the embedded role.
    pub fn effective_role_id(&self) -> Option<i64> {
        self.role_id.or(self.role.as_ref().map(|r| r.id))
    }

    pub fn is_customer_service(&self) -> bool {
        self.role_name() == ROLE_CUSTOMER_SERVICE
    }

    /// Not soft-deleted.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    pub fn created_label(&self) -> String {
        format_timestamp(self.created_at.as_deref())
    }

    pub fn deleted_label(&self) -> String {
        format_timestamp(self.deleted_at.as_deref())
    }
}

/// Render a backend timestamp as `DD-MM-YYYY HH:MM`; unparseable values pass through.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d-%m-%Y %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d-%m-%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_id: Option<i64>,
}

/// Body of `PUT /users/:id`. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_id: Option<i64>,
}

/// Body of `PUT /users/:id/role`.
#[derive(Debug, Clone, Serialize)]
pub struct RoleChange {
    pub role_id: i64,
}

/// Body of `POST /users/:id/assign-counter`.
#[derive(Debug, Clone, Serialize)]
pub struct CounterAssignment {
    pub counter_id: i64,
}
