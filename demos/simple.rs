use std::error::Error;

use virgool::{
    CanonicalizeChars, NormalizeWhitespace, Options, Virgool,
    profile::{Profile, preset},
};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Default pipeline – letters, affixes, punctuation and spacing
    // ────────────────────────────────────────────────────────────────
    let virgool = Virgool::default();

    println!(
        "Default : {}",
        virgool.normalize("ويراستار به شما كمك مي كند تا متون فارسي زيبا تر و درست تري بنويسيد .")?
    );
    // → ویراستار به شما کمک می‌کند تا متون فارسی زیباتر و درست‌تری بنویسید.

    println!(
        "Marks   : {}",
        virgool.normalize("قیمت: 1200 تومان, تخفیف 15% ... واقعا؟؟؟!!!")?
    );
    // → قیمت: ۱۲۰۰ تومان، تخفیف ۱۵٪… واقعا؟!

    // ────────────────────────────────────────────────────────────────
    // Protected spans – HTML tags and URIs come back untouched
    // ────────────────────────────────────────────────────────────────
    println!(
        "HTML    : {}",
        virgool.normalize(r#"<p>این "متن" را ببينيد</p> در https://example.com/fa"#)?
    );
    // → <p>این «متن» را ببینید</p> در https://example.com/fa

    // ────────────────────────────────────────────────────────────────
    // Markdown ordered lists keep their Latin numbering
    // ────────────────────────────────────────────────────────────────
    println!("List    :\n{}", virgool.normalize("1. مورد اول\n2. مورد دوم")?);

    // ────────────────────────────────────────────────────────────────
    // Options from a JSON document – unknown keys are ignored
    // ────────────────────────────────────────────────────────────────
    let latin_digits = Virgool::builder()
        .options(Options::from_json(r#"{"fix_english_numbers": false}"#)?)
        .build();

    println!(
        "Config  : {}",
        latin_digits.normalize("قیمت: 1200 تومان, تخفیف 15%")?
    );
    // → قیمت: 1200 تومان، تخفیف 15٪

    // ────────────────────────────────────────────────────────────────
    // Profiles – orthography only, or a hand-picked stage list
    // ────────────────────────────────────────────────────────────────
    println!(
        "Ortho   : [{}]",
        virgool.normalize_with_profile(&preset::orthography(), "  كتاب ( 12 )  ")?
    );
    // → [  کتاب ( ۱۲ )  ]

    let letters = Profile::plugin_builder("letters")
        .add_stage(CanonicalizeChars)
        .add_stage(NormalizeWhitespace)
        .build();

    println!(
        "Letters : {}",
        virgool.normalize_with_profile(&letters, " مي  كند ")?
    );
    // → می کند

    Ok(())
}
