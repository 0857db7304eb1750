// ============================================================================
// Basic Usage Example
// ============================================================================

use currency_mask::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Currency Mask Example ===\n");

    // Mask a few raw inputs with different formats
    println!("Masking raw input...");
    let formats = [
        ("default", FormattingConfig::default()),
        ("us dollar", FormattingConfig::us_dollar()),
        ("euro", FormattingConfig::euro()),
        ("swiss franc", FormattingConfig::swiss_franc()),
        ("swedish krona", FormattingConfig::swedish_krona()),
    ];
    for (name, config) in &formats {
        let result = mask("123456789", config);
        println!("  {:<14} {:>20}  (value: {})", name, result.masked_value, result.value);
    }

    // Values supplied from outside are rounded, not shifted
    println!("\nMasking external values...");
    let config = FormattingConfig::default();
    for value in [1234567.89123, 1234567.89999, 0.005] {
        let result = mask_initial(value, &config);
        println!("  {:<14} -> {}", value, result.masked_value);
    }

    // Drive a headless field the way a UI toolkit would
    println!("\n=== Typing Into A Field ===");
    let config = FormattingConfig::us_dollar().with_allow_negative(true);
    let mut input = HeadlessInput::new();
    let mut field = CurrencyField::new(config, 0, Arc::new(LoggingChangeHandler));
    field.mount(&mut input, true);
    print_field(&input);

    for key in ["1", "2", "3", "4", "5", "6"] {
        input.insert(key);
        field.input(&mut input);
        print_field(&input);
    }

    println!("\nToggling the sign...");
    input.select(SelectionRange::collapsed(2));
    input.insert("-");
    field.input(&mut input);
    print_field(&input);

    println!("\nSelect all on focus...");
    let selection = field.focus(&mut input, true);
    println!("  selected {}..{}", selection.start, selection.end);

    println!("\nFinal value: {}", field.value());
}

fn print_field(input: &HeadlessInput) {
    let caret = input.selection().end;
    let (before, after): (String, String) = {
        let chars: Vec<char> = input.value().chars().collect();
        let split = caret.min(chars.len());
        (chars[..split].iter().collect(), chars[split..].iter().collect())
    };
    println!("  {}|{}", before, after);
}
