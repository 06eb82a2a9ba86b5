use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use imuframe::framing::{checksum16, read_frames, Frame, BLOCK_LEN, DEVICE_ID, FRAME_LEN, SYNC};

fn telemetry_stream(num_frames: usize) -> Vec<u8> {
    let mut dat = Vec::new();
    for i in 0..num_frames {
        // A couple of noise bytes between frames; must not end in a
        // sync byte, which would break the following frame's sync pair
        dat.extend_from_slice(&[0x00, 0xff]);
        let mut block = vec![0u8; BLOCK_LEN];
        block[0] = DEVICE_ID;
        block[1] = (i & 0xff) as u8;
        dat.extend_from_slice(&[SYNC, SYNC, FRAME_LEN]);
        dat.extend_from_slice(&block);
        dat.extend_from_slice(&checksum16(&block).to_be_bytes());
    }
    dat
}

fn bench_decode(c: &mut Criterion) {
    let dat = telemetry_stream(1000);
    let mut group = c.benchmark_group("framing");
    group.throughput(Throughput::Bytes(dat.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            let frames: Vec<Frame> = read_frames(Cursor::new(&dat))
                .map_while(Result::ok)
                .collect();
            assert_eq!(frames.len(), 1000);
        });
    });
    group.finish();
}

fn bench_checksum(c: &mut Criterion) {
    let block = [0xa5u8; BLOCK_LEN];
    let mut group = c.benchmark_group("checksum");
    group.throughput(Throughput::Bytes(block.len() as u64));
    group.bench_function("checksum16", |b| {
        b.iter(|| checksum16(&block));
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_checksum);
criterion_main!(benches);
