use criterion::{Criterion, criterion_group, criterion_main};
use tablekeep_core::catalog::Catalog;
use tablekeep_core::encoding::attribute::{decode_attribute_key, encode_attribute_key};
use tablekeep_core::store::MemoryStore;
use tablekeep_core::types::AttributeType;

fn bench_encode_attribute_key(c: &mut Criterion) {
    c.bench_function("encode_attribute_key", |b| {
        b.iter(|| encode_attribute_key("employee_salary", AttributeType::Double));
    });
}

fn bench_decode_attribute_key(c: &mut Criterion) {
    let key = encode_attribute_key("employee_salary", AttributeType::Double);
    c.bench_function("decode_attribute_key", |b| {
        b.iter(|| decode_attribute_key(&key).unwrap());
    });
}

fn bench_create_table_50_attrs(c: &mut Criterion) {
    let names: Vec<String> = (0..50).map(|i| format!("attr{i:03}")).collect();
    let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let types = vec![AttributeType::Int; 50];

    c.bench_function("create_table_50_attrs", |b| {
        let catalog = Catalog::new(MemoryStore::new()).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            let table = format!("table_{i}");
            catalog
                .create_table(&table, &name_refs, &types, &["attr000"])
                .unwrap();
            i += 1;
        });
    });
}

fn bench_describe_table(c: &mut Criterion) {
    let catalog = Catalog::new(MemoryStore::new()).unwrap();
    let names: Vec<String> = (0..50).map(|i| format!("attr{i:03}")).collect();
    let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let types = vec![AttributeType::String; 50];
    catalog
        .create_table("wide", &name_refs, &types, &["attr000"])
        .unwrap();

    c.bench_function("describe_table_50_attrs", |b| {
        b.iter(|| catalog.describe_table("wide").unwrap().unwrap());
    });
}

fn bench_list_tables(c: &mut Criterion) {
    let catalog = Catalog::new(MemoryStore::new()).unwrap();
    for i in 0..20 {
        let table = format!("table_{i:02}");
        catalog
            .create_table(
                &table,
                &["id", "name", "value"],
                &[
                    AttributeType::Int,
                    AttributeType::String,
                    AttributeType::Double,
                ],
                &["id"],
            )
            .unwrap();
    }

    c.bench_function("list_tables_20", |b| {
        b.iter(|| catalog.list_tables().unwrap());
    });
}

criterion_group!(
    benches,
    bench_encode_attribute_key,
    bench_decode_attribute_key,
    bench_create_table_50_attrs,
    bench_describe_table,
    bench_list_tables,
);
criterion_main!(benches);
