//! End-to-end walkthrough of the service surface: seed a synthesized
//! collection, gate a query with a token, then update one record.

use serde_json::json;
use standin_store::{QueryOptions, StandinService};

use crate::commands::sample::Sample;

pub fn run(count: usize, as_json: bool) {
    let mut service = StandinService::new();

    let id = match service.add_source_synthesized::<Sample>(count) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let token = match service.login(&json!({ "session": "demo" })) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let listing = match service.get::<Sample>(id, Some(&token), QueryOptions::default(), None) {
        Ok(Some(body)) => body,
        Ok(None) => String::new(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let renamed = Sample {
        name: "renamed_0".to_string(),
        ..Sample::default()
    };
    let update_reply = service.update::<Sample>(id, Some(&token), |s| s.id == 0, &renamed);

    let survivors = service
        .get_filtered::<Sample>(
            id,
            Some(&token),
            |s| s.name.starts_with("renamed"),
            QueryOptions::default(),
            None,
        )
        .unwrap_or_default();

    if as_json {
        println!(
            "{}",
            json!({
                "source": id,
                "listing": listing,
                "update": update_reply,
                "renamed": survivors,
            })
        );
    } else {
        println!("seeded source {id} with {count} records");
        println!("listing: {listing}");
        println!("update:  {update_reply}");
        println!("renamed: {survivors}");
    }
}
