use port_registry::models::*;
use port_registry::store::RegistryStore;
use port_registry::{RegistryError, VesselRegistry, MAX_VOLUME};
use speculate2::speculate;

fn sv1() -> RegisterVesselInput {
    RegisterVesselInput::sailing("SV1", "PA", 500.0, 20)
}

speculate! {
    before {
        let mut registry = VesselRegistry::new();
    }

    describe "register_vessel" {
        it "registers a sailing vessel" {
            let vessel = registry.register_vessel(sv1()).expect("Failed to register");

            assert_eq!(vessel.registration_code, "SV1");
            assert_eq!(vessel.nationality, "PA");
            assert_eq!(vessel.volume, 500.0);
            assert_eq!(vessel.kind, VesselKind::Sailing { passenger_count: 20 });
            assert!(registry.compute_total_capacity() > 0.0);
        }

        it "registers a cargo vessel" {
            let vessel = registry
                .register_vessel(RegisterVesselInput::cargo("CV1", "CO", 750.0, true))
                .expect("Failed to register");

            assert_eq!(vessel.kind, VesselKind::Cargo { carries_liquids: true });
        }

        it "accepts variant tags in any case" {
            let mut input = RegisterVesselInput::cargo("CV1", "CO", 100.0, false);
            input.variant = "CARGO".to_string();

            assert!(registry.register_vessel(input).is_ok());
        }

        it "keeps registration order" {
            registry.register_vessel(RegisterVesselInput::cargo("B", "CO", 100.0, false)).unwrap();
            registry.register_vessel(RegisterVesselInput::sailing("A", "PA", 100.0, 1)).unwrap();

            let codes: Vec<&str> = registry
                .vessels()
                .iter()
                .map(|v| v.registration_code.as_str())
                .collect();
            assert_eq!(codes, vec!["B", "A"]);
        }

        describe "duplicates" {
            it "rejects a second vessel with the same code" {
                registry.register_vessel(sv1()).unwrap();
                let before = registry.compute_total_capacity();

                let err = registry.register_vessel(sv1()).unwrap_err();

                assert_eq!(err, RegistryError::DuplicateRegistration("SV1".to_string()));
                assert_eq!(registry.len(), 1);
                assert_eq!(registry.compute_total_capacity(), before);
            }

            it "rejects a duplicate code even with a different variant" {
                registry.register_vessel(sv1()).unwrap();

                let err = registry
                    .register_vessel(RegisterVesselInput::cargo("SV1", "CO", 100.0, false))
                    .unwrap_err();

                assert!(matches!(err, RegistryError::DuplicateRegistration(_)));
            }
        }

        describe "volume" {
            it "rejects zero volume" {
                let err = registry
                    .register_vessel(RegisterVesselInput::sailing("Z", "PA", 0.0, 0))
                    .unwrap_err();
                assert_eq!(err, RegistryError::InvalidVolume(0.0));
                assert!(registry.is_empty());
            }

            it "accepts the maximum volume" {
                assert!(registry
                    .register_vessel(RegisterVesselInput::sailing("M", "PA", MAX_VOLUME, 0))
                    .is_ok());
            }

            it "rejects a volume just above the maximum" {
                let err = registry
                    .register_vessel(RegisterVesselInput::sailing("M", "PA", 1000.0001, 0))
                    .unwrap_err();
                assert!(matches!(err, RegistryError::InvalidVolume(_)));
            }

            it "rejects a negative volume" {
                let err = registry
                    .register_vessel(RegisterVesselInput::cargo("N", "PA", -1.0, false))
                    .unwrap_err();
                assert_eq!(err, RegistryError::InvalidVolume(-1.0));
            }

            it "leaves the registry empty when a cargo vessel is too large" {
                let err = registry
                    .register_vessel(RegisterVesselInput::cargo("CV1", "CO", 1500.0, false))
                    .unwrap_err();

                assert_eq!(err, RegistryError::InvalidVolume(1500.0));
                assert!(registry.is_empty());
                assert_eq!(registry.compute_total_capacity(), 0.0);
            }
        }

        describe "variant" {
            it "rejects an unrecognized variant without inserting" {
                let mut input = sv1();
                input.variant = "submarine".to_string();

                let err = registry.register_vessel(input).unwrap_err();

                assert_eq!(err, RegistryError::UnrecognizedVariant("submarine".to_string()));
                assert!(registry.is_empty());
            }
        }

        describe "registration code" {
            it "rejects a blank code" {
                let err = registry
                    .register_vessel(RegisterVesselInput::sailing("  ", "PA", 10.0, 0))
                    .unwrap_err();
                assert_eq!(err, RegistryError::MissingRegistrationCode);
            }
        }
    }

    describe "find_vessel" {
        it "returns None on an empty registry" {
            assert!(registry.find_vessel("SV1").is_none());
            assert!(registry.find_vessel("").is_none());
        }

        it "finds a registered vessel by exact code" {
            registry.register_vessel(sv1()).unwrap();

            let found = registry.find_vessel("SV1").expect("Vessel not found");
            assert_eq!(found.nationality, "PA");
            assert!(registry.find_vessel("sv1").is_none());
        }
    }

    describe "compute_total_capacity" {
        it "is zero when empty" {
            assert_eq!(registry.compute_total_capacity(), 0.0);
        }

        it "sums each vessel's own capacity" {
            registry.register_vessel(sv1()).unwrap();
            registry.register_vessel(RegisterVesselInput::cargo("CV1", "CO", 500.0, true)).unwrap();
            registry.register_vessel(RegisterVesselInput::cargo("CV2", "CO", 250.0, false)).unwrap();

            let expected: f64 = registry.vessels().iter().map(Vessel::capacity).sum();
            assert_eq!(registry.compute_total_capacity(), expected);
            assert_eq!(expected, 460.0 + 400.0 + 250.0);
        }

        it "returns the same value when queried twice" {
            registry.register_vessel(sv1()).unwrap();

            let first = registry.compute_total_capacity();
            let second = registry.compute_total_capacity();
            assert_eq!(first, second);
        }
    }

    describe "store" {
        it "shares one registry between clones" {
            let store = RegistryStore::from_registry(registry);
            let other = store.clone();

            store.register_vessel(sv1()).unwrap();

            assert!(other.find_vessel("SV1").is_some());
            assert_eq!(other.capacity_summary().vessel_count, 1);
        }

        it "reports capacity with the vessel detail" {
            let store = RegistryStore::from_registry(registry);
            store.register_vessel(sv1()).unwrap();

            let detail = store.find_vessel("SV1").unwrap();
            assert_eq!(detail.capacity, 460.0);
            assert_eq!(store.capacity_summary().total_capacity, 460.0);
        }

        it "does not change state on a rejected registration" {
            let store = RegistryStore::from_registry(registry);
            store.register_vessel(sv1()).unwrap();

            assert!(store.register_vessel(sv1()).is_err());
            assert_eq!(store.list_vessels().len(), 1);
        }

        it "serializes registrations from many threads" {
            let store = RegistryStore::from_registry(registry);

            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = store.clone();
                    std::thread::spawn(move || store.register_vessel(sv1()).is_ok())
                })
                .collect();
            let successes = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count();

            assert_eq!(successes, 1);
            assert_eq!(store.capacity_summary().vessel_count, 1);
        }
    }
}
