use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::Method;
use webmimic::emulation::{Browser, EmulationFactory};
use webmimic::http::OrderedHeaderMap;

fn request_headers() -> OrderedHeaderMap {
    let mut headers = OrderedHeaderMap::new();
    headers.insert(":method", "GET").unwrap();
    headers.insert(":authority", "en.wikipedia.org").unwrap();
    headers.insert(":scheme", "https").unwrap();
    headers.insert(":path", "/wiki/Main_Page").unwrap();
    headers.insert(
        "Cookie",
        "WMF-Last-Access=xxxxxxxxxxx; WMF-Last-Access-Global=xxxxxxxxxxx; GeoIP=xxxxxxxxxxxxxxxxxxxxxxxxxxx"
    ).unwrap();
    headers.insert("Referer", "https://en.wikipedia.org/").unwrap();
    headers.insert("X-Client-Data", "CIa2yQEIpbbJAQ==").unwrap();
    headers
}

fn benchmark_arrange(c: &mut Criterion) {
    let headers = request_headers();

    for browser in Browser::ALL {
        let emu = browser.emulation().unwrap();
        c.bench_function(&format!("arrange_get_{browser}"), |b| {
            b.iter(|| emu.arrange_headers(black_box(&headers), &Method::GET))
        });
        c.bench_function(&format!("arrange_post_{browser}"), |b| {
            b.iter(|| emu.arrange_headers(black_box(&headers), &Method::POST))
        });
    }
}

fn benchmark_to_header_map(c: &mut Criterion) {
    let emu = Browser::Chrome.emulation().unwrap();
    let arranged = emu.arrange_headers(&request_headers(), &Method::GET);

    c.bench_function("headers_to_header_map", |b| {
        b.iter(|| black_box(&arranged).to_header_map())
    });
}

criterion_group!(benches, benchmark_arrange, benchmark_to_header_map);
criterion_main!(benches);
