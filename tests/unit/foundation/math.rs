use super::*;

#[test]
fn mul_div255_identity_and_bounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn lerp_u8_endpoints_are_exact() {
    assert_eq!(lerp_u8(13, 240, 0.0), 13);
    assert_eq!(lerp_u8(13, 240, 1.0), 240);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
}
