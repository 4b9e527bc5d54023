// Cross-module tests for the types crate

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn test_burn_sentinel() {
        let burn = AccountId::burn();
        assert!(burn.is_burn());
        assert_eq!(burn.as_str(), constants::BURN_ADDRESS);
        assert!(!AccountId::new("ST2CY5...").is_burn());
        assert_eq!(AccountId::from(constants::BURN_ADDRESS), burn);
    }

    #[test]
    fn test_event_roundtrip_serialization() {
        let event = SupplyEvent::new(AccountId::new("ST2CY5..."), Amount::from_units(1_000_000), 1000);

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"recipient":"ST2CY5...","amount":1000000,"block_height":1000}"#
        );

        let deserialized: SupplyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = LedgerConfig::new("admin", "oracle")
            .with_max_supply(Amount::from_units(42))
            .with_redemption_lock_period(7);

        let json = config.to_json().unwrap();
        let parsed = LedgerConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_lock_expiry_overflow() {
        assert_eq!(lock_expiry(1000, 1440).unwrap(), 2440);
        assert_eq!(lock_expiry(u64::MAX - 1, 2), Err(LedgerError::ArithmeticOverflow));
    }

    #[test]
    fn test_json_hash_is_stable() {
        let event = SupplyEvent::new(AccountId::new("a"), Amount::from_units(5), 9);
        let h1 = compute_json_hash(&event).unwrap();
        let h2 = compute_json_hash(&event.clone()).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }

    proptest! {
        #[test]
        fn checked_add_agrees_with_u128(a in any::<u128>(), b in any::<u128>()) {
            let result = Amount::from_units(a).checked_add(Amount::from_units(b));
            match a.checked_add(b) {
                Some(sum) => prop_assert_eq!(result, Ok(Amount::from_units(sum))),
                None => prop_assert_eq!(result, Err(LedgerError::ArithmeticOverflow)),
            }
        }

        #[test]
        fn sub_then_add_restores(a in any::<u64>(), b in any::<u64>()) {
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let hi = Amount::from_units(hi as u128);
            let lo = Amount::from_units(lo as u128);
            let diff = hi.checked_sub(lo).unwrap();
            prop_assert_eq!(diff.checked_add(lo).unwrap(), hi);
        }
    }
}
