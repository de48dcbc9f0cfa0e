/// Property-based tests for request signing and error bookkeeping
///
/// Signatures must be a pure function of the request and credentials, and
/// every field that goes into the signed message must affect the result.
mod common;

use common::{client, err, ok};
use proptest::prelude::*;
use pwned_client::signing::{Credentials, HttpMethod, RequestDescriptor, SigningRevision};
use serde_json::json;

const BASE_URL: &str = "http://api.example.com/";

fn method_strategy() -> impl Strategy<Value = HttpMethod> {
    prop_oneof![
        Just(HttpMethod::Get),
        Just(HttpMethod::Post),
        Just(HttpMethod::Delete),
    ]
}

// Arbitrary request with printable body and a handful of query pairs
fn descriptor_strategy() -> impl Strategy<Value = RequestDescriptor> {
    (
        method_strategy(),
        "[a-z0-9/]{1,24}",
        prop::option::of("[ -~]{0,40}"),
        prop::collection::vec(("[a-z]{1,6}", "[a-zA-Z0-9 &=]{0,8}"), 0..3),
    )
        .prop_map(|(method, path, body, query)| {
            let mut descriptor = RequestDescriptor::new(method, path);
            descriptor.body = body;
            descriptor.query = query;
            descriptor
        })
}

fn credentials_strategy() -> impl Strategy<Value = Credentials> {
    ("[a-zA-Z0-9]{1,16}", "[ -~]{1,32}")
        .prop_map(|(public_key, private_key)| Credentials::new(public_key, private_key))
}

fn signature(descriptor: &RequestDescriptor, credentials: &Credentials) -> String {
    descriptor
        .sign(BASE_URL, credentials, SigningRevision::QueryAware)
        .signature
}

fn other_method(method: HttpMethod) -> HttpMethod {
    match method {
        HttpMethod::Get => HttpMethod::Post,
        HttpMethod::Post => HttpMethod::Delete,
        HttpMethod::Delete => HttpMethod::Get,
    }
}

proptest! {
    #[test]
    fn test_signature_is_deterministic(
        descriptor in descriptor_strategy(),
        credentials in credentials_strategy(),
    ) {
        let a = descriptor.sign(BASE_URL, &credentials, SigningRevision::QueryAware);
        let b = descriptor.clone().sign(BASE_URL, &credentials, SigningRevision::QueryAware);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.signature.len(), 64);
        let expected_suffix = format!("&signature={}", a.signature);
        prop_assert!(a.url.ends_with(&expected_suffix));
    }

    #[test]
    fn test_every_signed_field_changes_signature(
        descriptor in descriptor_strategy(),
        credentials in credentials_strategy(),
    ) {
        let original = signature(&descriptor, &credentials);

        let mut method = descriptor.clone();
        method.method = other_method(descriptor.method);
        prop_assert_ne!(&signature(&method, &credentials), &original);

        let mut path = descriptor.clone();
        path.path.push('x');
        prop_assert_ne!(&signature(&path, &credentials), &original);

        let mut body = descriptor.clone();
        body.body = Some(format!("{}x", descriptor.body.as_deref().unwrap_or("")));
        prop_assert_ne!(&signature(&body, &credentials), &original);

        let query = descriptor.clone().with_query("extra", 1);
        prop_assert_ne!(&signature(&query, &credentials), &original);

        let private_key = Credentials::new(
            credentials.public_key.clone(),
            format!("{}x", credentials.private_key),
        );
        prop_assert_ne!(&signature(&descriptor, &private_key), &original);

        let public_key = Credentials::new(
            format!("{}x", credentials.public_key),
            credentials.private_key.clone(),
        );
        prop_assert_ne!(&signature(&descriptor, &public_key), &original);
    }

    #[test]
    fn test_error_history_follows_failing_calls(
        script in prop::collection::vec(prop::option::of("[a-z_]{1,12}"), 0..12),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let mut client = client();
        for reply in &script {
            match reply {
                Some(key) => client.transport().reply(err(key, "failed")),
                None => client.transport().reply(ok(json!("pong"))),
            }
        }

        runtime.block_on(async {
            for _ in &script {
                let _ = client.ping().await;
            }
        });

        let expected: Vec<&str> = script.iter().flatten().map(String::as_str).collect();
        let recorded: Vec<&str> = client.errors().iter().map(|e| e.key.as_str()).collect();
        prop_assert_eq!(recorded, expected);

        let last_failed = script.last().and_then(|reply| reply.as_deref());
        prop_assert_eq!(client.last_error().map(|e| e.key.as_str()), last_failed);
    }
}
