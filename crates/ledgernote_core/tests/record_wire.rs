use ledgernote_core::{Credentials, NewUser, Note, Transaction, TransactionKind, User};
use uuid::Uuid;

const ID: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn note_serializes_with_web_field_names() {
    let note = Note {
        id: Uuid::parse_str(ID).unwrap(),
        title: "t".to_string(),
        content: "c".to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
    };

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], ID);
    assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
    assert!(json.get("created_at").is_none());

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn transaction_kind_is_serialized_as_type() {
    let entry = Transaction {
        id: Uuid::parse_str(ID).unwrap(),
        amount: -12.5,
        category: "Food".to_string(),
        kind: TransactionKind::Expense,
        title: "lunch".to_string(),
        date: "2024-01-01".to_string(),
        note: String::new(),
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "expense");
    assert_eq!(json["amount"], -12.5);
    assert!(json.get("kind").is_none());
}

#[test]
fn unknown_transaction_type_fails_to_decode() {
    let value = serde_json::json!({
        "id": ID,
        "amount": 1,
        "category": "x",
        "type": "transfer",
        "title": "x",
        "date": "2024-01-01",
        "note": ""
    });
    assert!(serde_json::from_value::<Transaction>(value).is_err());
}

#[test]
fn user_types_use_camel_case_and_hide_password_in_debug() {
    let new_user: NewUser = serde_json::from_value(serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "password": "analytical",
        "birthDate": "1815-12-10"
    }))
    .unwrap();
    assert_eq!(new_user.first_name, "Ada");
    assert_eq!(new_user.birth_date, "1815-12-10");

    let user = User {
        id: Uuid::parse_str(ID).unwrap(),
        first_name: new_user.first_name.clone(),
        last_name: new_user.last_name.clone(),
        email: new_user.email.clone(),
        password: new_user.password.clone(),
        birth_date: new_user.birth_date.clone(),
    };
    assert!(!format!("{user:?}").contains("analytical"));

    let credentials: Credentials = new_user.credentials();
    assert!(!format!("{credentials:?}").contains("analytical"));
}
