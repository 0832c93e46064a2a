use causerr::{CodedError, Render, RenderMode, ResultExt, cause, id, message};
use std::error::Error;
use std::fs::File;

const SETTINGS_UNREADABLE: i64 = 12;

fn load_settings(path: &str) -> causerr::Result<File> {
    File::open(path).with_id(SETTINGS_UNREADABLE, "Your settings could not be loaded.")
}

fn save_document(free_bytes: u64) -> Result<(), Box<dyn Error + Send + Sync>> {
    if free_bytes == 0 {
        return Err(CodedError::new(3, "disk full", "The file could not be saved.").into());
    }
    Ok(())
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    if let Err(err) = load_settings("/nonexistent/settings.toml") {
        // SCENARIO 1: The end user sees only the message.
        println!("1. [USER] {}", err.message());

        // SCENARIO 2: Developers get the full picture.
        println!("\n2. [DEVELOPER] {}", err);
        println!("\n3. [DETAILED]\n{}", err.render(RenderMode::Detailed));

        err.with_record(|record| {
            let mut line = String::new();
            if record.write_to(&mut line).is_ok() {
                println!("\n4. [LOG] {}", line);
            }
        });
    }

    // SCENARIO 3: Generic code only holds a boxed error.
    if let Err(err) = save_document(0) {
        println!("\n5. [GENERIC] {}", err);
        println!("   id:      {}", id(&*err));
        println!("   message: {}", message(&*err));
        if let Some(c) = cause(&*err) {
            println!("   cause:   {}", c);
        }
    }
}
