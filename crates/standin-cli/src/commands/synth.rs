use standin_record::synthesize;

use crate::commands::sample::Sample;

pub fn run(count: usize, as_json: bool) {
    let records = synthesize::<Sample>(count);

    if as_json {
        match serde_json::to_string_pretty(&records) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for record in &records {
        println!(
            "{:>4}  {:<12} score={:<8} active={:<5} created={}",
            record.id,
            record.name,
            record.score,
            record.active,
            record.created.to_rfc3339()
        );
    }
}
