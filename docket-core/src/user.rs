//! Users, roles and role-based permissions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A member of the firm, as returned by the login and roster endpoints.
///
/// Immutable for the session once loaded; this is also the entity the CLI
/// persists as the local session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Short label shown where an avatar would be: the stored avatar text,
    /// or the first two characters of the name, uppercased.
    pub fn avatar_label(&self) -> String {
        match &self.avatar {
            Some(a) => a.clone(),
            None => self.name.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

/// A user's role in the firm.
///
/// Wire values are the Portuguese identifiers the backend uses. An
/// unrecognized value is preserved verbatim in `Other` and displays with
/// the Intern mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Director,
    Manager,
    Sales,
    Marketing,
    Lawyer,
    Intern,
    Other(String),
}

impl Role {
    /// Parse a wire value, keeping unknown values verbatim.
    pub fn from_wire(value: impl Into<String>) -> Role {
        let value = value.into();
        match value.as_str() {
            "chefe" => Role::Director,
            "gestor" => Role::Manager,
            "comercial" => Role::Sales,
            "marketing" => Role::Marketing,
            "advogado" => Role::Lawyer,
            "estagiario" => Role::Intern,
            _ => Role::Other(value),
        }
    }

    /// The wire value this role serializes back to.
    pub fn as_wire(&self) -> &str {
        match self {
            Role::Director => "chefe",
            Role::Manager => "gestor",
            Role::Sales => "comercial",
            Role::Marketing => "marketing",
            Role::Lawyer => "advogado",
            Role::Intern => "estagiario",
            Role::Other(value) => value,
        }
    }

    /// Display label. Unknown roles fall back to the Intern label.
    pub fn label(&self) -> &str {
        match self {
            Role::Director => "Diretor Geral",
            Role::Manager => "Gestor",
            Role::Sales => "Comercial",
            Role::Marketing => "Marketing",
            Role::Lawyer => "Advogado",
            Role::Intern | Role::Other(_) => "Estagiário",
        }
    }

    /// Roles allowed to change event status and delete events.
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Director | Role::Manager | Role::Lawyer)
    }

    /// Roles allowed to create events: the edit roles plus Sales.
    pub fn can_create(&self) -> bool {
        self.can_edit() || matches!(self, Role::Sales)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Intern
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Role::from_wire(String::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- wire round-trip ---

    #[test]
    fn known_roles_round_trip() {
        for wire in ["chefe", "gestor", "comercial", "marketing", "advogado", "estagiario"] {
            let role = Role::from_wire(wire);
            assert!(!matches!(role, Role::Other(_)), "{wire} should be known");
            assert_eq!(role.as_wire(), wire);
        }
    }

    #[test]
    fn unknown_role_preserved_verbatim() {
        let role = Role::from_wire("socio");
        assert_eq!(role, Role::Other("socio".to_string()));
        assert_eq!(role.as_wire(), "socio");

        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"socio\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn unknown_role_displays_as_intern() {
        assert_eq!(Role::from_wire("socio").label(), Role::Intern.label());
    }

    // --- permissions ---

    #[test]
    fn edit_roles() {
        assert!(Role::Director.can_edit());
        assert!(Role::Manager.can_edit());
        assert!(Role::Lawyer.can_edit());
        assert!(!Role::Sales.can_edit());
        assert!(!Role::Marketing.can_edit());
        assert!(!Role::Intern.can_edit());
        assert!(!Role::from_wire("socio").can_edit());
    }

    #[test]
    fn create_roles() {
        assert!(Role::Sales.can_create());
        assert!(Role::Lawyer.can_create());
        assert!(!Role::Marketing.can_create());
        assert!(!Role::Intern.can_create());
    }

    // --- avatar label ---

    #[test]
    fn avatar_label_prefers_stored_avatar() {
        let user = User {
            id: 1,
            name: "Ana Paula".into(),
            email: "ana@borelli.adv.br".into(),
            role: Role::Manager,
            avatar: Some("AP".into()),
        };
        assert_eq!(user.avatar_label(), "AP");
    }

    #[test]
    fn avatar_label_falls_back_to_initials() {
        let user = User {
            id: 1,
            name: "carlos".into(),
            email: String::new(),
            role: Role::Director,
            avatar: None,
        };
        assert_eq!(user.avatar_label(), "CA");
    }
}
