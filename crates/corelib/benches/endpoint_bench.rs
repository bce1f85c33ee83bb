use corelib::Endpoint;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_endpoint(c: &mut Criterion) {
    let endpoint = Endpoint::builder()
        .service_name("frontend")
        .ipv4(127 << 24 | 1)
        .ipv6("2001:db8::c001".parse::<std::net::Ipv6Addr>().unwrap().octets())
        .port(8080)
        .unwrap()
        .build()
        .unwrap();
    let json = endpoint.to_json();

    c.bench_function("endpoint_build", |b| {
        b.iter(|| {
            Endpoint::builder()
                .service_name(black_box("FrontEnd"))
                .ipv4(black_box(127 << 24 | 1))
                .port(black_box(8080))
                .unwrap()
                .build()
                .unwrap()
        })
    });

    c.bench_function("endpoint_to_json", |b| b.iter(|| black_box(&endpoint).to_json()));

    c.bench_function("endpoint_from_json", |b| {
        b.iter(|| Endpoint::from_json(black_box(&json)).unwrap())
    });
}

criterion_group!(benches, bench_endpoint);
criterion_main!(benches);
