use criterion::{criterion_group, criterion_main, Criterion};
use webmimic::http::boundary::BoundaryGenerator;
use webmimic::http::multipart::{Form, Part};

fn benchmark_generate(c: &mut Criterion) {
    c.bench_function("boundary_webkit", |b| {
        b.iter(|| BoundaryGenerator::WebKit.generate())
    });
    c.bench_function("boundary_gecko", |b| {
        b.iter(|| BoundaryGenerator::Gecko.generate())
    });
}

fn benchmark_form_body(c: &mut Criterion) {
    let payload = vec![0u8; 16 * 1024];
    c.bench_function("multipart_into_body_16k", |b| {
        b.iter(|| {
            Form::with_boundary("----WebKitFormBoundaryABCDABCDABCDABCD")
                .text("name", "value")
                .part("file", Part::bytes(payload.clone()).file_name("blob.bin"))
                .into_body()
        })
    });
}

criterion_group!(benches, benchmark_generate, benchmark_form_body);
criterion_main!(benches);
