//! End-to-end properties of the codec over the public API, plus the
//! RFC 7541 Appendix C.4 examples as fixed vectors.

use proptest::prelude::*;

use huffpack::decoder::{full_byte, nibble};
use huffpack::encoder::{encode_bits, encode_with_table};
use huffpack::{codebook, decode, decode_to_vec, encode, encode_to_vec};
use huffpack::{encoded_len, max_decoded_len, max_encoded_len, Error};

#[test]
fn rfc7541_c4_vectors() {
    let vectors: &[(&[u8], &[u8])] = &[
        (
            b"www.example.com",
            &[0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff],
        ),
        (b"no-cache", &[0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]),
        (b"custom-key", &[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d, 0x7f]),
        (
            b"custom-value",
            &[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xb8, 0xe8, 0xb4, 0xbf],
        ),
    ];
    for &(plain, wire) in vectors {
        assert_eq!(encode_to_vec(plain), wire);
        assert_eq!(decode_to_vec(wire).as_deref(), Ok(plain));
    }
}

#[test]
fn empty_is_idempotent() {
    let mut buf = [0u8; 1];
    assert_eq!(encode(&[], &mut buf), Ok(0));
    assert_eq!(decode(&[], &mut buf), Ok(0));
}

#[test]
fn single_nul() {
    assert_eq!(encode_to_vec(&[0x00]), [0xff, 0xc7]);
    assert_eq!(decode_to_vec(&[0xff, 0xc7]).as_deref(), Ok(&[0x00u8][..]));
}

#[test]
fn negative_vectors() {
    assert_eq!(decode_to_vec(&[0xff]), Err(Error::InvalidEos));
    assert_eq!(decode_to_vec(&[0x00]), Err(Error::InvalidPadding));
}

fn decode_backend(
    backend: fn(&[u8], &mut [u8]) -> Result<usize, Error>,
    src: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; max_decoded_len(src.len())];
    backend(src, &mut out).map(|n| {
        out.truncate(n);
        out
    })
}

proptest! {
    // Decode(encode(s)) == s through both decoder backends, with the
    // encoded length inside its bounds and the padding all ones.
    #[test]
    fn roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_to_vec(&data);

        prop_assert_eq!(encoded.len(), encoded_len(&data));
        prop_assert!(encoded.len() <= max_encoded_len(data.len()));
        prop_assert!(encoded.len() >= (data.len() * 5 + 7) / 8);

        let bits: usize = data.iter().map(|&b| codebook::len(b as usize) as usize).sum();
        let pad = encoded.len() * 8 - bits;
        prop_assert!(pad <= 7);
        if pad > 0 {
            let mask = (1u8 << pad) - 1;
            prop_assert_eq!(encoded.last().unwrap() & mask, mask, "padding must be ones");
        }

        prop_assert_eq!(decode_backend(full_byte::decode, &encoded), Ok(data.clone()));
        prop_assert_eq!(decode_backend(nibble::decode, &encoded), Ok(data));
    }

    // Both encoder variants emit identical bytes.
    #[test]
    fn encoder_variants_agree(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut a = vec![0u8; max_encoded_len(data.len())];
        let mut b = vec![0u8; max_encoded_len(data.len())];
        let na = encode_bits(&data, &mut a).unwrap();
        let nb = encode_with_table(&data, &mut b).unwrap();
        prop_assert_eq!(&a[..na], &b[..nb]);
    }

    // On arbitrary input the two decoder backends agree byte for byte on
    // success and kind for kind on failure.
    #[test]
    fn decoder_backends_agree(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let full = decode_backend(full_byte::decode, &data);
        let nib = decode_backend(nibble::decode, &data);
        prop_assert_eq!(full, nib);
    }

    // Appending whole bytes of ones past a valid encoding crosses the
    // 7-bit padding limit and must be rejected.
    #[test]
    fn overlong_padding_rejected(data in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut encoded = encode_to_vec(&data);
        encoded.push(0xff);
        prop_assert_eq!(decode_to_vec(&encoded), Err(Error::InvalidEos));
    }
}
