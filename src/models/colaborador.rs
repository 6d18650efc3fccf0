use serde::Serialize;

/// Team member identity record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Colaborador {
    pub id: i64,                 // ⇔ colaboradores.id
    pub user_id: Option<String>, // ⇔ colaboradores.user_id (opaque auth identity)
    pub name: String,            // ⇔ colaboradores.name
    pub surname: String,         // ⇔ colaboradores.surname
}

impl Colaborador {
    /// "Name Surname", as shown in tables and headers.
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_empty_surname() {
        let mut c = Colaborador {
            id: 1,
            user_id: None,
            name: "Ana".into(),
            surname: "Pérez".into(),
        };
        assert_eq!(c.full_name(), "Ana Pérez");
        c.surname.clear();
        assert_eq!(c.full_name(), "Ana");
    }
}
