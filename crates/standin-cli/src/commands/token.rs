use chrono::{Duration, Utc};
use serde_json::{Map, Value, json};

use crate::cli::TokenCommands;

pub fn run(command: TokenCommands) {
    match command {
        TokenCommands::Issue {
            claims,
            secret,
            ttl,
            json,
        } => issue(&claims, &secret, ttl, json),

        TokenCommands::Verify {
            token,
            secret,
            json,
        } => verify(&token, &secret, json),
    }
}

fn issue(claims: &[String], secret: &str, ttl: i64, as_json: bool) {
    let mut payload = Map::new();
    for claim in claims {
        let Some((key, value)) = claim.split_once('=') else {
            eprintln!("error: claim '{claim}' is not key=value");
            std::process::exit(1);
        };
        payload.insert(key.to_string(), Value::String(value.to_string()));
    }

    let expires_at = Utc::now() + Duration::seconds(ttl);
    let token = match standin_auth::issue_with_expiry(&Value::Object(payload), expires_at, secret) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if as_json {
        println!(
            "{}",
            json!({ "token": token, "expires_at": expires_at.to_rfc3339() })
        );
    } else {
        println!("{token}");
    }
}

fn verify(token: &str, secret: &str, as_json: bool) {
    let valid = standin_auth::validate(token, secret);

    if as_json {
        println!("{}", json!({ "valid": valid }));
    } else {
        println!("{}", if valid { "valid" } else { "invalid" });
    }

    if !valid {
        std::process::exit(1);
    }
}
