// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chart_scrape::specs::chart::{extract, locate};

const GENRES: [&str; 6] = ["Drama", "Crime", "Action", "Adventure", "Sci-Fi", "Mystery"];

/// A page shaped like the real chart: some noise scripts, then 250 edges.
fn synthetic_page(n: usize) -> String {
    let edges: Vec<String> = (0..n)
        .map(|i| {
            let genres: Vec<String> = (0..=(i % 3))
                .map(|g| format!(r#"{{"genre":{{"text":"{}"}}}}"#, GENRES[(i + g) % GENRES.len()]))
                .collect();
            format!(
                r#"{{"currentRank":{},"node":{{"titleText":{{"text":"Title {}"}},"releaseYear":{{"year":{}}},"ratingsSummary":{{"aggregateRating":{:.1},"voteCount":{}}},"titleGenres":{{"genres":[{}]}}}}}}"#,
                i + 1,
                i,
                1950 + (i % 75),
                7.5 + (i % 18) as f64 / 10.0,
                10_000 + i * 1_234,
                genres.join(",")
            )
        })
        .collect();

    let noise = r#"<script type="text/javascript">var cfg = {"a":[1,2,3]};</script>"#.repeat(20);
    format!(
        r#"<html><head>{noise}</head><body><script id="__NEXT_DATA__" type="application/json">{{"props":{{"pageProps":{{"pageData":{{"chartTitles":{{"edges":[{}]}}}}}}}}}}</script></body></html>"#,
        edges.join(",")
    )
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(250);
    let payload = match locate(&page) {
        Some(p) => p.to_owned(),
        None => panic!("synthetic page has no payload"),
    };

    c.bench_function("locate", |b| {
        b.iter(|| black_box(locate(black_box(&page)).map(str::len)))
    });

    c.bench_function("extract", |b| {
        b.iter(|| {
            let batch = extract(black_box(&payload));
            black_box(batch.map(|b| b.len()).unwrap_or(0))
        })
    });

    c.bench_function("locate_extract", |b| {
        b.iter(|| {
            let n = locate(black_box(&page)).and_then(|p| extract(p).ok()).map(|b| b.len());
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
