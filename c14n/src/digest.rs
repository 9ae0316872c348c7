//! The registry of digest methods.
//!
//! A [`Method`] turns the canonical text of a subject into a hexadecimal value.
//! Methods come in four [families](Family);
//! only the variable-length digests require a length,
//! and only the randomized identifiers are not deterministic.
use std::fmt;
use std::str::{FromStr, Utf8Error};

use sha2::Digest;
use sha3::digest::{ExtendableOutput, Update};
use thiserror::Error;
use uuid::Uuid;

/// Error raised by digest methods.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The method name is not in the registry.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
    /// The length parameter is missing or invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
}

/// The families of [methods](Method).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// A cryptographic digest with a fixed output length.
    FixedDigest,
    /// An extendable-output function, whose length must be given (in bytes).
    VariableDigest,
    /// A name-based UUID, derived from the input.
    NameBased,
    /// A UUID ignoring its input.
    Randomized,
}

/// A digest method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Method {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    /// BLAKE2b-512
    Blake2b,
    /// BLAKE2s-256
    Blake2s,
    Shake128,
    Shake256,
    /// Name-based UUID (MD5) in the URL namespace
    Uuid3,
    /// Name-based UUID (SHA-1) in the URL namespace
    Uuid5,
    /// Random UUID
    Uuid4,
    /// Time-ordered UUID
    Uuid7,
}

use Method::*;

impl Method {
    /// Every supported method.
    pub const ALL: [Method; 18] = [
        Md5, Sha1, Sha224, Sha256, Sha384, Sha512, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Blake2b,
        Blake2s, Shake128, Shake256, Uuid3, Uuid5, Uuid4, Uuid7,
    ];

    /// The name of this method, as used in templates and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Md5 => "md5",
            Sha1 => "sha1",
            Sha224 => "sha224",
            Sha256 => "sha256",
            Sha384 => "sha384",
            Sha512 => "sha512",
            Sha3_224 => "sha3_224",
            Sha3_256 => "sha3_256",
            Sha3_384 => "sha3_384",
            Sha3_512 => "sha3_512",
            Blake2b => "blake2b",
            Blake2s => "blake2s",
            Shake128 => "shake_128",
            Shake256 => "shake_256",
            Uuid3 => "uuid3",
            Uuid5 => "uuid5",
            Uuid4 => "uuid4",
            Uuid7 => "uuid7",
        }
    }

    /// The family of this method.
    pub fn family(&self) -> Family {
        match self {
            Shake128 | Shake256 => Family::VariableDigest,
            Uuid3 | Uuid5 => Family::NameBased,
            Uuid4 | Uuid7 => Family::Randomized,
            _ => Family::FixedDigest,
        }
    }

    /// Whether this method always gives the same value for the same input.
    pub fn is_deterministic(&self) -> bool {
        self.family() != Family::Randomized
    }

    /// Check that `length` is acceptable for this method.
    ///
    /// Only [variable digests](Family::VariableDigest) use it,
    /// and they require it to be positive.
    pub fn check_length(&self, length: Option<usize>) -> Result<usize, DigestError> {
        match (self.family(), length) {
            (Family::VariableDigest, Some(0)) => Err(DigestError::InvalidParameter(format!(
                "length of {} must be positive",
                self.name()
            ))),
            (Family::VariableDigest, Some(n)) => Ok(n),
            (Family::VariableDigest, None) => Err(DigestError::InvalidParameter(format!(
                "{} requires a length",
                self.name()
            ))),
            _ => Ok(0),
        }
    }

    /// Digest `input` and return the value as lowercase hexadecimal.
    ///
    /// `length` is the number of bytes produced by variable digests,
    /// and is ignored by other methods.
    pub fn hash_str(&self, input: &str, length: Option<usize>) -> Result<String, DigestError> {
        let data = input.as_bytes();
        let value = match self {
            Md5 => hex(&md5::Md5::digest(data)),
            Sha1 => hex(&sha1::Sha1::digest(data)),
            Sha224 => hex(&sha2::Sha224::digest(data)),
            Sha256 => hex(&sha2::Sha256::digest(data)),
            Sha384 => hex(&sha2::Sha384::digest(data)),
            Sha512 => hex(&sha2::Sha512::digest(data)),
            Sha3_224 => hex(&sha3::Sha3_224::digest(data)),
            Sha3_256 => hex(&sha3::Sha3_256::digest(data)),
            Sha3_384 => hex(&sha3::Sha3_384::digest(data)),
            Sha3_512 => hex(&sha3::Sha3_512::digest(data)),
            Blake2b => hex(&blake2::Blake2b512::digest(data)),
            Blake2s => hex(&blake2::Blake2s256::digest(data)),
            Shake128 => hex(&xof::<sha3::Shake128>(data, self.check_length(length)?)),
            Shake256 => hex(&xof::<sha3::Shake256>(data, self.check_length(length)?)),
            Uuid3 => Uuid::new_v3(&Uuid::NAMESPACE_URL, data).simple().to_string(),
            Uuid5 => Uuid::new_v5(&Uuid::NAMESPACE_URL, data).simple().to_string(),
            Uuid4 => Uuid::new_v4().simple().to_string(),
            Uuid7 => Uuid::now_v7().simple().to_string(),
        };
        Ok(value)
    }

    /// Digest `input`, which must be valid UTF-8.
    ///
    /// See [`Method::hash_str`].
    pub fn hash_utf8(&self, input: &[u8], length: Option<usize>) -> Result<String, DigestError> {
        self.hash_str(std::str::from_utf8(input)?, length)
    }
}

impl FromStr for Method {
    type Err = DigestError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| DigestError::UnsupportedMethod(name.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A method together with its optional length,
/// parsed from strings of the form `method` or `method:length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    /// The method.
    pub method: Method,
    /// The length (for variable digests).
    pub length: Option<usize>,
}

impl MethodSpec {
    /// Override the length of this spec, if `length` is not `None`.
    pub fn with_length(mut self, length: Option<usize>) -> Self {
        if length.is_some() {
            self.length = length;
        }
        self
    }

    /// Digest `input` with this method and length.
    pub fn hash_str(&self, input: &str) -> Result<String, DigestError> {
        self.method.hash_str(input, self.length)
    }
}

impl FromStr for MethodSpec {
    type Err = DigestError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (name, length) = match spec.split_once(':') {
            None => (spec, None),
            Some((name, length)) => {
                let length = length
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| DigestError::InvalidParameter(format!("invalid length in {spec:?}")))?;
                (name, Some(length))
            }
        };
        Ok(MethodSpec {
            method: name.parse()?,
            length,
        })
    }
}

impl From<Method> for MethodSpec {
    fn from(method: Method) -> Self {
        MethodSpec { method, length: None }
    }
}

fn xof<X: Default + Update + ExtendableOutput>(data: &[u8], length: usize) -> Vec<u8> {
    let mut hasher = X::default();
    Update::update(&mut hasher, data);
    let mut out = vec![0; length];
    hasher.finalize_xof_into(&mut out);
    out
}

fn hex(hash: &impl AsRef<[u8]>) -> String {
    hash.as_ref().iter().map(|b| format!("{b:02x}")).collect()
}
