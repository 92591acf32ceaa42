// benches/normalize_bench.rs
#![deny(unsafe_code)]

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use virgool::{
    CanonicalizeChars, CleanupMarks, ConvertTokens, FixAffixSpacing, FixBraceSpacing,
    NormalizePunctuation, NormalizeWhitespace, NormalizeZwnj, Virgool, stage::Stage,
};
use std::{borrow::Cow, hint::black_box};

// ── Typical inputs: messy user text, web snippets, clean prose ───────────────

const SAMPLES: &[&str] = &[
    // 1. Arabic letters, unjoined prefixes and suffixes, loose punctuation
    "ويراستار به شما كمك مي كند تا متون فارسي زيبا تر و درست تري بنويسيد .",
    // 2. Latin digits, misc characters, marks
    "قیمت: 1200 تومان, تخفیف 15% ... واقعا؟؟؟!!!",
    // 3. HTML and URIs that must survive untouched
    r#"<p>این "متن" را ببينيد</p> در https://example.com/fa?q=1"#,
    // 4. Already normalized → zero-copy path
    "کتاب‌ها را می‌خوانم، (با دقت) و «آرام».",
    // 5. Latin only
    "plain ascii text with nothing to do",
    "",
];

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Virgool");
    let virgool = Virgool::default();

    let long = SAMPLES[..4].join("\n").repeat(200);
    let mut samples: Vec<&str> = SAMPLES.iter().copied().collect();
    samples.push(long.as_str());

    for &input in &samples {
        group.throughput(Throughput::Bytes(input.len() as u64));

        let id = BenchmarkId::new("changed", format!("{input:.40}"));
        group.bench_function(id, |b| {
            b.iter_batched(
                || input,
                |text| black_box(virgool.normalize(black_box(text)).unwrap().len()),
                BatchSize::SmallInput,
            );
        });

        // Second pass over normalized text should borrow.
        let normalized = virgool.normalize(input).unwrap().into_owned();
        let id = BenchmarkId::new("unchanged", format!("{normalized:.40}"));
        group.bench_function(id, |b| {
            b.iter_batched(
                || normalized.as_str(),
                |text| {
                    let result = virgool.normalize(black_box(text)).unwrap();
                    black_box(matches!(result, Cow::Borrowed(s) if std::ptr::eq(s, text)))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_single_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stage");
    let input = SAMPLES[..3].join("\n").repeat(50);
    group.throughput(Throughput::Bytes(input.len() as u64));

    let mut bench_stage = |stage: &dyn Fn() -> Virgool, name: &str| {
        let virgool = stage();
        group.bench_function(name, |b| {
            b.iter(|| black_box(virgool.normalize(black_box(&input)).unwrap().len()));
        });
    };

    fn only<S: Stage + Copy + 'static>(stage: S) -> impl Fn() -> Virgool {
        move || Virgool::builder().add_stage(stage).build()
    }

    bench_stage(&only(CanonicalizeChars), "canonicalize_chars");
    bench_stage(&only(NormalizePunctuation), "normalize_punctuation");
    bench_stage(&only(NormalizeZwnj), "normalize_zwnj");
    bench_stage(&only(ConvertTokens), "convert_tokens");
    bench_stage(&only(FixAffixSpacing), "fix_affix_spacing");
    bench_stage(&only(CleanupMarks), "cleanup_marks");
    bench_stage(&only(FixBraceSpacing), "fix_brace_spacing");
    bench_stage(&only(NormalizeWhitespace), "normalize_whitespace");

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(2))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(200)
        .noise_threshold(0.02);
    targets = bench_full_pipeline, bench_single_stages
}

criterion_main!(benches);
