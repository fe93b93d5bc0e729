use crate::users::{dto::PublicUser, repo_types::User};

pub const REPORT_HEADER: &str = "--- Relatório de Usuários ---";
pub const EMPTY_REPORT: &str = "Nenhum usuário cadastrado.";

/// Control characters are escaped so a name never spans lines.
fn single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// Plain-text report, one line per user in the given order.
pub fn render_text(users: &[User]) -> String {
    if users.is_empty() {
        return EMPTY_REPORT.to_string();
    }
    let mut out = String::from(REPORT_HEADER);
    for u in users {
        out.push('\n');
        out.push_str(&format!(
            "ID: {}, Nome: {}, Status: {}",
            u.id,
            single_line(&u.name),
            u.status
        ));
    }
    out
}

pub fn render_json(users: &[User]) -> serde_json::Result<String> {
    let items: Vec<PublicUser> = users.iter().map(PublicUser::from).collect();
    serde_json::to_string_pretty(&items)
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::users::repo_types::{UserId, UserStatus};
    use time::OffsetDateTime;

    fn user(name: &str, status: UserStatus) -> User {
        User {
            id: UserId::new(),
            name: name.into(),
            email: "x@y.com".into(),
            age: 40,
            is_admin: false,
            status,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn empty_report() {
        assert_eq!(render_text(&[]), "Nenhum usuário cadastrado.");
    }

    #[test]
    fn header_then_one_line_per_user() {
        let a = user("Alice", UserStatus::Active);
        let b = user("Bob", UserStatus::Inactive);
        let text = render_text(&[a.clone(), b.clone()]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], format!("ID: {}, Nome: Alice, Status: ativo", a.id));
        assert_eq!(lines[2], format!("ID: {}, Nome: Bob, Status: inativo", b.id));
    }

    #[test]
    fn multiline_name_stays_on_one_line() {
        let forged = user("Ali\nID: fake, Nome: Eve, Status: ativo", UserStatus::Active);
        let text = render_text(&[forged.clone()]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            format!(
                "ID: {}, Nome: Ali\\nID: fake, Nome: Eve, Status: ativo, Status: ativo",
                forged.id
            )
        );
    }

    #[test]
    fn json_lists_public_fields() {
        let a = user("Alice", UserStatus::Active);
        let json: serde_json::Value = serde_json::from_str(&render_json(&[a.clone()]).unwrap()).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], a.id.to_string());
        assert_eq!(arr[0]["name"], "Alice");
        assert_eq!(arr[0]["status"], "ativo");
        assert_eq!(arr[0]["is_admin"], false);
        assert!(arr[0].get("email").is_none());
    }

    #[test]
    fn json_of_empty_directory_is_empty_array() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
