// example/src/main.rs

#[allow(dead_code)]
mod generated;

use mavgen::Message;

// Bring the generated types into scope:
use generated::{IcarousFmsState, MessageIcarousHeartbeat, MessageIcarousKinematicBands, DIALECT};

fn main() {
    let heartbeat = MessageIcarousHeartbeat {
        status: IcarousFmsState::ICAROUS_FMS_STATE_CRUISE.0 as u8,
    };
    println!("heartbeat id = {}, status = {}", heartbeat.id(), heartbeat.status);

    // Fields are listed in declaration order, with their XML names preserved.
    for field in MessageIcarousKinematicBands::FIELDS.iter().take(3) {
        println!(
            "  {} <- {} ({}){}",
            field.name,
            field.xml_name,
            field.xml_type,
            field.enum_name.map(|e| format!(" enum {}", e)).unwrap_or_default()
        );
    }

    println!("dialect {} has {} messages:", DIALECT.name, DIALECT.len());
    for info in DIALECT.iter() {
        println!("  {:>6} {} ({} fields)", info.id, info.name, info.fields.len());
    }

    if let Some(info) = DIALECT.get(42001) {
        println!("42001 is {}", info.name);
    }
}
