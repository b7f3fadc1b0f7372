use mongodb::bson::{self, doc, oid::ObjectId};

use crate::service_request::{self, RequestId};
use crate::user;

#[test]
fn user_document_omits_unset_id() {
    let model = user::Model {
        id: None,
        name: "A".into(),
        email: "a@x.com".into(),
        password: "p".into(),
        dob: "2000-01-01".into(),
        role: "family".into(),
    };
    let doc = bson::to_document(&model).expect("serialize user");
    assert!(!doc.contains_key("_id"));
    assert_eq!(doc.get_str("email").unwrap(), "a@x.com");
    // stored verbatim, no hashing
    assert_eq!(doc.get_str("password").unwrap(), "p");
}

#[test]
fn user_document_round_trips_assigned_id() {
    let oid = ObjectId::new();
    let model = user::Model {
        id: Some(oid),
        name: "A".into(),
        email: "a@x.com".into(),
        password: "p".into(),
        dob: "2000-01-01".into(),
        role: "family".into(),
    };
    let doc = bson::to_document(&model).expect("serialize user");
    assert_eq!(doc.get_object_id("_id").unwrap(), oid);
    let back: user::Model = bson::from_document(doc).expect("deserialize user");
    assert_eq!(back.id, Some(oid));
}

fn pending_request() -> service_request::Model {
    service_request::Model {
        id: None,
        user_id: "64f000000000000000000001".into(),
        user_name: "Elder One".into(),
        user_email: "elder@x.com".into(),
        service_type: "nursing".into(),
        requirements: "daily visit".into(),
        cost: 120.5,
        status: service_request::STATUS_PENDING.into(),
        created_at: "2025-01-02T03:04:05".into(),
        updated_at: "2025-01-02T03:04:06".into(),
        caregiver_id: None,
        caregiver_name: None,
        caregiver_email: None,
        processed_at: None,
    }
}

#[test]
fn request_document_uses_camel_case_keys() {
    let doc = bson::to_document(&pending_request()).expect("serialize request");
    assert_eq!(doc.get_str("userId").unwrap(), "64f000000000000000000001");
    assert_eq!(doc.get_str("serviceType").unwrap(), "nursing");
    assert_eq!(doc.get_str("createdAt").unwrap(), "2025-01-02T03:04:05");
    assert_eq!(doc.get_f64("cost").unwrap(), 120.5);
    assert_eq!(doc.get_str("status").unwrap(), "pending");
}

#[test]
fn undecided_request_has_no_caregiver_keys() {
    let doc = bson::to_document(&pending_request()).expect("serialize request");
    for key in ["caregiverId", "caregiverName", "caregiverEmail", "processedAt"] {
        assert!(!doc.contains_key(key), "unexpected key {key}");
    }
}

#[test]
fn stored_request_without_caregiver_fields_deserializes() {
    let doc = doc! {
        "_id": ObjectId::new(),
        "userId": "u1",
        "userName": "Elder One",
        "userEmail": "elder@x.com",
        "serviceType": "transport",
        "requirements": "weekly trip",
        "cost": 40.0,
        "status": "pending",
        "createdAt": "2025-01-02T03:04:05",
        "updatedAt": "2025-01-02T03:04:06",
    };
    let model: service_request::Model = bson::from_document(doc).expect("deserialize");
    assert_eq!(model.caregiver_id, None);
    assert_eq!(model.processed_at, None);
}

#[test]
fn request_id_parses_and_formats_hex() {
    let oid = ObjectId::new();
    let id: RequestId = oid.to_hex().parse().expect("parse hex id");
    assert_eq!(id.as_object_id(), oid);
    assert_eq!(id.to_string(), oid.to_hex());
}

#[test]
fn request_id_rejects_malformed_input() {
    assert!("not-a-request-id".parse::<RequestId>().is_err());
    assert!("".parse::<RequestId>().is_err());
    // right length, non-hex characters
    assert!("zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RequestId>().is_err());
}
