use crate::{
    Error, Fingerprint, FingerprintOrigin, HardwareInterface, InterfaceSource, MacidGenerator,
    RandSource, RequestId, RequestIdGenerator, Result, SystemClock, TimeSource,
};
use md5::{Digest, Md5};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread::scope;
use std::time::{Duration, UNIX_EPOCH};

struct MockTime {
    secs: u32,
}

impl TimeSource for MockTime {
    fn current_secs(&self) -> u32 {
        self.secs
    }
}

struct MockInterfaces {
    nics: Vec<HardwareInterface>,
}

impl InterfaceSource for MockInterfaces {
    fn interfaces(&self) -> Result<Vec<HardwareInterface>> {
        Ok(self.nics.clone())
    }
}

struct BrokenInterfaces;

impl InterfaceSource for BrokenInterfaces {
    fn interfaces(&self) -> Result<Vec<HardwareInterface>> {
        Err(Error::InterfacesUnavailable {
            reason: "EPERM".into(),
        })
    }
}

struct FixedRand(u8);

impl RandSource for FixedRand {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.0);
        Ok(())
    }
}

struct BrokenRand;

impl RandSource for BrokenRand {
    fn fill(&self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::RandomUnavailable {
            reason: "entropy pool closed".into(),
        })
    }
}

/// Panics if asked for randomness: proves the hardware path never draws it.
struct UnreachableRand;

impl RandSource for UnreachableRand {
    fn fill(&self, _dest: &mut [u8]) -> Result<()> {
        panic!("random fallback used while a hardware address was available")
    }
}

fn md5_prefix(seed: &[u8]) -> [u8; 4] {
    let digest = Md5::digest(seed);
    [digest[0], digest[1], digest[2], digest[3]]
}

fn mock_generator(secs: u32) -> MacidGenerator<MockTime> {
    MacidGenerator::from_components(Fingerprint::from_bytes([0xe6, 0xed, 0xc1, 0xfa]), 0, MockTime { secs })
}

fn run_sequence_increments_by_one<G>(generator: &G)
where
    G: RequestIdGenerator,
{
    let ids: Vec<RequestId> = (0..10).map(|_| generator.next_id()).collect();

    for pair in ids.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        assert_ne!(prev, next);
        assert_eq!(next.sequence(), prev.sequence().wrapping_add(1));
        assert_eq!(next.machine(), prev.machine());
        assert!(next.timestamp() >= prev.timestamp());
    }

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

fn run_unique_across_threads<G>(generator: &G)
where
    G: RequestIdGenerator + Sync,
{
    const IDS_PER_THREAD: usize = 4096;
    let threads = num_cpus::get().max(2);
    let seen = Arc::new(Mutex::new(HashSet::with_capacity(threads * IDS_PER_THREAD)));

    scope(|s| {
        for _ in 0..threads {
            let seen = Arc::clone(&seen);
            s.spawn(move || {
                let local: Vec<_> = (0..IDS_PER_THREAD).map(|_| generator.next_id()).collect();
                let mut seen = seen.lock().unwrap();
                for id in local {
                    assert!(seen.insert(id), "duplicate id {id:?}");
                }
            });
        }
    });

    assert_eq!(seen.lock().unwrap().len(), threads * IDS_PER_THREAD);
}

fn run_sentinel_has_only_timestamp<G>(generator: &G)
where
    G: RequestIdGenerator,
{
    let ts = UNIX_EPOCH + Duration::from_secs(12_345_678);
    let id = generator.new_with_time(ts);

    assert_eq!(id.datetime(), ts);
    assert_eq!(id.machine(), [0x00, 0x00, 0x00, 0x00]);
    assert_eq!(id.sequence(), 0);
}

#[test]
fn mock_generator_sequence_increments_by_one() {
    run_sequence_increments_by_one(&mock_generator(42));
}

#[test]
fn system_generator_sequence_increments_by_one() {
    let generator = MacidGenerator::new().unwrap();
    run_sequence_increments_by_one(&generator);
}

#[test]
fn arc_generator_sequence_increments_by_one() {
    let generator = Arc::new(mock_generator(42));
    run_sequence_increments_by_one(&generator);
}

#[test]
fn mock_generator_unique_across_threads() {
    run_unique_across_threads(&mock_generator(42));
}

#[test]
fn system_generator_unique_across_threads() {
    let generator = MacidGenerator::new().unwrap();
    run_unique_across_threads(&generator);
}

#[test]
fn mock_generator_sentinel_has_only_timestamp() {
    run_sentinel_has_only_timestamp(&mock_generator(42));
}

#[test]
fn system_generator_sentinel_has_only_timestamp() {
    run_sentinel_has_only_timestamp(&MacidGenerator::new().unwrap());
}

#[test]
fn next_id_stamps_every_field() {
    let generator = mock_generator(1_506_230_724);

    let id = generator.next_id();

    assert_eq!(id.timestamp(), 1_506_230_724);
    assert_eq!(id.machine(), [0xe6, 0xed, 0xc1, 0xfa]);
    assert_eq!(id.sequence(), 1);
    assert_eq!(id.hex(), "59c741c4e6edc1fa00000001");
    assert_eq!(generator.sequence(), 1);
}

#[test]
fn sentinel_does_not_advance_sequence() {
    let generator = mock_generator(42);
    let _ = generator.new_with_time(UNIX_EPOCH);
    assert_eq!(generator.next_id().sequence(), 1);
}

#[test]
fn sequence_wraps_to_zero() {
    let generator = MacidGenerator::from_components(
        Fingerprint::from_bytes([1, 2, 3, 4]),
        u32::MAX - 1,
        MockTime { secs: 7 },
    );

    assert_eq!(generator.next_id().sequence(), u32::MAX);
    assert_eq!(generator.next_id().sequence(), 0);
    assert_eq!(generator.next_id().sequence(), 1);
}

#[test]
fn generators_keep_independent_counters() {
    let a = mock_generator(42);
    let b = mock_generator(42);

    a.next_id();
    a.next_id();

    assert_eq!(a.next_id().sequence(), 3);
    assert_eq!(b.next_id().sequence(), 1);
}

#[test]
fn fingerprint_uses_first_up_interface_with_address() {
    let interfaces = MockInterfaces {
        nics: vec![
            HardwareInterface::new("lo", true, [0u8; 6]),
            HardwareInterface::new("eth1", false, [0x02, 0x42, 0xac, 0x11, 0x00, 0x09]),
            HardwareInterface::new("tun0", true, Vec::new()),
            HardwareInterface::new("eth0", true, [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
            HardwareInterface::new("wlan0", true, [0x02, 0x00, 0x00, 0x00, 0x00, 0x01]),
        ],
    };

    let generator =
        MacidGenerator::with_sources(&interfaces, &UnreachableRand, MockTime { secs: 0 }).unwrap();
    let fingerprint = generator.fingerprint();

    assert_eq!(fingerprint.bytes(), md5_prefix(b"00:1a:2b:3c:4d:5e"));
    assert_eq!(
        fingerprint.origin(),
        &FingerprintOrigin::Hardware {
            interface: "eth0".into()
        }
    );
    assert!(!fingerprint.is_random());
    assert_eq!(generator.next_id().machine(), fingerprint.bytes());
}

#[test]
fn fingerprint_falls_back_to_random_seed() {
    let interfaces = MockInterfaces {
        nics: vec![
            HardwareInterface::new("lo", true, [0u8; 6]),
            HardwareInterface::new("eth0", false, [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
        ],
    };

    let fingerprint = Fingerprint::from_sources(&interfaces, &FixedRand(0x5a)).unwrap();

    assert!(fingerprint.is_random());
    assert_eq!(fingerprint.origin(), &FingerprintOrigin::Random);
    assert_eq!(fingerprint.bytes(), md5_prefix(&[0x5a; 12]));
}

#[test]
fn fingerprint_falls_back_when_no_interfaces() {
    let interfaces = MockInterfaces { nics: Vec::new() };
    let fingerprint = Fingerprint::from_sources(&interfaces, &FixedRand(0)).unwrap();
    assert!(fingerprint.is_random());
}

#[test]
fn interface_enumeration_failure_is_fatal() {
    let err = MacidGenerator::with_sources(&BrokenInterfaces, &FixedRand(0), SystemClock).unwrap_err();
    assert_eq!(
        err,
        Error::InterfacesUnavailable {
            reason: "EPERM".into()
        }
    );
}

#[test]
fn random_failure_is_fatal() {
    let interfaces = MockInterfaces { nics: Vec::new() };
    let err = MacidGenerator::with_sources(&interfaces, &BrokenRand, SystemClock).unwrap_err();
    assert!(matches!(err, Error::RandomUnavailable { .. }));
}

#[test]
fn fingerprint_display_is_lowercase_hex() {
    let fingerprint = Fingerprint::from_bytes([0xe6, 0xed, 0xc1, 0xfa]);
    assert_eq!(fingerprint.to_string(), "e6edc1fa");
    assert_eq!(fingerprint.origin().to_string(), "explicit");
}

#[test]
fn accessors_report_fingerprint_and_last_sequence() {
    let generator = mock_generator(42);
    assert_eq!(generator.sequence(), 0);
    assert_eq!(generator.fingerprint().bytes(), [0xe6, 0xed, 0xc1, 0xfa]);

    let id = generator.next_id();
    assert_eq!(generator.sequence(), id.sequence());
    assert_eq!(generator.fingerprint().bytes(), id.machine());
}
