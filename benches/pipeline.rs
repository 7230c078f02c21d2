//! Benchmarks for the xpak pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xpak::{pack, parse_manifest, split_segments, unpack};

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    // Manifest with a few hundred assets, the scale a real project hits
    let mut manifest = String::from(
        "<Manifest>\n    <OutputDir>content</OutputDir>\n    <Compress>true</Compress>\n    <Content>\n",
    );
    for i in 0..256 {
        manifest.push_str(&format!(
            "        <Asset name=\"sprites/batch{0}/frame{0}\">\n            <Type>Texture</Type>\n            <Build>art/frame{0}.png</Build>\n        </Asset>\n",
            i
        ));
    }
    manifest.push_str("    </Content>\n</Manifest>\n");

    group.bench_function("parse_manifest_256_assets", |b| {
        b.iter(|| parse_manifest(black_box(&manifest), "bench.manifest", "/project").unwrap())
    });

    group.bench_function("split_segments", |b| {
        b.iter(|| split_segments(black_box("sprites/characters\\player//idle/frame_01")))
    });

    group.finish();
}

// -- Compression benchmarks --

fn bench_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");

    // 256x256 RGBA texture payload with some structure to it
    let texture: Vec<u8> = (0..256u32 * 256 * 4)
        .map(|i| ((i / 4) % 251) as u8)
        .collect();
    let packed = pack(&texture);

    group.bench_function("pack_texture_256", |b| {
        b.iter(|| pack(black_box(&texture)))
    });

    group.bench_function("unpack_texture_256", |b| {
        b.iter(|| unpack(black_box(&packed), texture.len()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_compression);
criterion_main!(benches);
