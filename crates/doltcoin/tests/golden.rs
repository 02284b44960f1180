//! Golden address vectors.
//!
//! Every DoltCoin implementation must produce identical address bytes and
//! text for these keys. The checksum column is the big-endian low 16 bits of
//! CRC-32C over `0x18 || public_key`.

use doltcoin::core::{address_bytes, decode_bytes, ADDRESS_LEN, VERSION_TAG};
use doltcoin::{decode, encode, Address, AddressError, Keypair, PublicKey};

struct Vector {
    name: &'static str,
    public_key: [u8; 32],
    checksum: &'static str,
    address: &'static str,
}

fn seed_key(seed: u8) -> [u8; 32] {
    *Keypair::from_seed(&[seed; 32]).public_key().as_bytes()
}

fn vectors() -> Vec<Vector> {
    vec![
        Vector {
            name: "all_zero_key",
            public_key: [0x00; 32],
            checksum: "f4a6",
            address: "DAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB5FG",
        },
        Vector {
            name: "all_ones_key",
            public_key: [0xff; 32],
            checksum: "694f",
            address: "DD7777777777777777777777777777777777777777777777777762KP",
        },
        Vector {
            name: "zero_seed",
            public_key: seed_key(0x00),
            checksum: "13ea",
            address: "DA5WUJ54Z23KILLCUOUNAKTPBVZWKMQVO4O6EQ5GHLAERIMLLHNCSE7K",
        },
        Vector {
            name: "seed_01",
            public_key: seed_key(0x01),
            checksum: "6965",
            address: "DCFIRY65OQE7DFP5KLNS2PF2LVZMUZYJX4OZIEQ36N2IQANUB5XVY2LF",
        },
        Vector {
            name: "seed_42",
            public_key: seed_key(0x42),
            checksum: "53d7",
            address: "DAQVF6GRTN4R2JCFGJBOCXZOVNWLPT72PNVF5UYAS6LA4BUYQHNREU6X",
        },
    ]
}

#[test]
fn golden_vectors_encode() {
    for v in vectors() {
        let text = encode(&v.public_key).unwrap();
        assert_eq!(text, v.address, "vector {}", v.name);

        let bytes = address_bytes(&PublicKey::from_bytes(v.public_key));
        assert_eq!(bytes.len(), ADDRESS_LEN);
        assert_eq!(bytes[0], VERSION_TAG);
        assert_eq!(&bytes[1..33], &v.public_key[..]);
        assert_eq!(hex::encode(&bytes[33..]), v.checksum, "vector {}", v.name);
    }
}

#[test]
fn golden_vectors_decode() {
    for v in vectors() {
        let key = decode(v.address).unwrap();
        assert_eq!(key.as_bytes(), &v.public_key, "vector {}", v.name);

        let address: Address = v.address.parse().unwrap();
        assert_eq!(address.public_key(), key);
        assert_eq!(hex::encode(address.checksum()), v.checksum);
    }
}

#[test]
fn seed_keys_match_reference() {
    assert_eq!(
        hex::encode(seed_key(0x42)),
        "2152f8d19b791d24453242e15f2eab6cb7cffa7b6a5ed30097960e069881db12"
    );
    assert_eq!(
        hex::encode(seed_key(0x01)),
        "8a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c"
    );
}

#[test]
fn version_number_is_shifted() {
    assert_eq!(doltcoin::core::VERSION_NUMBER << 3, VERSION_TAG);
    assert_eq!(VERSION_TAG, 0x18);
    // The leading 'D' of every address comes from the tag's top five bits.
    for v in vectors() {
        assert!(v.address.starts_with('D'));
    }
}

#[test]
fn foreign_version_is_not_reported_as_corruption() {
    let mut bytes = address_bytes(&PublicKey::from_bytes([0u8; 32]));
    bytes[0] = 2 << 3;
    assert_eq!(decode_bytes(&bytes), Err(AddressError::UnsupportedVersion(0x10)));
}
