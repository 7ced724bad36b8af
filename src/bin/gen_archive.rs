//! Synthetic data-package generator for exercising chatdump.
//!
//! Usage: cargo run --features gen-test --bin gen_archive -- [channels] [messages] [root]
//! Example: cargo run --features gen-test --bin gen_archive -- 50 2000 messages

use std::env;
use std::fs;
use std::path::Path;
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::json;

const SNIPPETS: &[&str] = &[
    "hey",
    "did you see this?",
    "lol",
    "ok sounds good",
    "brb",
    "Привет!",
    "こんにちは",
    "🔥🔥🔥",
    "check the thread above",
    "same time tomorrow?",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let channels: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
    let messages: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000);
    let root = args.get(3).map(|s| s.as_str()).unwrap_or("messages");

    println!("🧪 Archive Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Channels:  {}", channels);
    println!("   Messages:  {} per channel", messages);
    println!("   Root:      {}", root);
    println!();

    let start = Instant::now();
    let mut rng = rand::thread_rng();

    // Snowflake-ish IDs: strictly increasing with random gaps
    let mut next_id: i64 = 794_183_829_873_885_224;

    for c in 0..channels {
        let channel_id = next_id;
        next_id += rng.gen_range(1_000..1_000_000);

        let dir = Path::new(root).join(format!("c{}", channel_id));
        fs::create_dir_all(&dir).expect("Failed to create channel directory");

        let meta = json!({
            "id": channel_id.to_string(),
            "type": "GUILD_TEXT",
            "name": format!("channel-{}", c),
        });
        fs::write(
            dir.join("channel.json"),
            serde_json::to_string_pretty(&meta).expect("Failed to serialize channel metadata"),
        )
        .expect("Failed to write channel.json");

        let mut entries = Vec::with_capacity(messages);
        for _ in 0..messages {
            let id = next_id;
            next_id += rng.gen_range(1..10_000);

            let year = rng.gen_range(2015..=2024);
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            let hour = rng.gen_range(0..24);
            let minute = rng.gen_range(0..60);
            let second = rng.gen_range(0..60);

            entries.push(json!({
                "ID": id,
                "Timestamp": format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ),
                "Contents": *SNIPPETS.choose(&mut rng).expect("snippet list is not empty"),
                "Attachments": "",
            }));
        }
        fs::write(
            dir.join("messages.json"),
            serde_json::to_string_pretty(&entries).expect("Failed to serialize message list"),
        )
        .expect("Failed to write messages.json");

        if (c + 1) % 10 == 0 || c + 1 == channels {
            eprint!("\r   Generated {}/{} channels", c + 1, channels);
        }
    }

    let elapsed = start.elapsed();

    println!("\n\n✅ Done!");
    println!("   Channels: {}", channels);
    println!("   IDs:      {}", channels * messages);
    println!("   Time:     {:.2}s", elapsed.as_secs_f64());
    println!();
    println!("   Try: cargo run -- {} --year 2020", root);
}
