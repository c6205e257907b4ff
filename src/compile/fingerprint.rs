use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::encode::job::JobDescriptor;

const XXH3_SEED: u64 = 0x5f1d_e3a7_90c2_4b68;

/// Stable 128-bit identity of a compiled job.
///
/// Two descriptors share a fingerprint exactly when they would hand the encoder the same argument
/// vector, so it can key caches of already-rendered outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct JobFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for JobFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint the encoder arguments of `job`.
pub fn fingerprint_job(job: &JobDescriptor) -> JobFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    let args = job.to_args();
    h.update(&(args.len() as u64).to_le_bytes());
    for arg in &args {
        // Length prefix keeps ["ab", "c"] and ["a", "bc"] apart.
        h.update(&(arg.len() as u64).to_le_bytes());
        h.update(arg.as_bytes());
    }
    let v = h.digest128();
    JobFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

impl JobDescriptor {
    /// See [`fingerprint_job`].
    pub fn fingerprint(&self) -> JobFingerprint {
        fingerprint_job(self)
    }
}
