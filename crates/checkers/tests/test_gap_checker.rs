use anyhow::Result;
use keisho_checkers::{
    check_gaps, classify, AnalysisContext, CheckEngine, Checker, CheckerRegistryBuilder,
    ContractRecord, FunctionRecord, GraphBuilder, Severity, StorageGapChecker, VariableRecord,
};

const OZ_UPGRADEABLE_DIR: &str = "node_modules/@openzeppelin/contracts-upgradeable";

fn upgradeable_base(name: &str) -> ContractRecord {
    ContractRecord {
        name: name.to_string(),
        source_path: format!("{}/{}.sol", OZ_UPGRADEABLE_DIR, name),
        variables: vec![VariableRecord {
            name: "__gap".to_string(),
            contract: name.to_string(),
        }],
        functions: vec![FunctionRecord {
            name: "init".to_string(),
            is_implemented: true,
        }],
        ..Default::default()
    }
}

fn contract(name: &str, bases: &[&str]) -> ContractRecord {
    ContractRecord {
        name: name.to_string(),
        bases: bases.iter().map(|b| b.to_string()).collect(),
        source_path: format!("contracts/{}.sol", name),
        functions: vec![FunctionRecord {
            name: "run".to_string(),
            is_implemented: true,
        }],
        ..Default::default()
    }
}

fn with_gap(mut record: ContractRecord) -> ContractRecord {
    let owner = record.name.clone();
    record.variables.push(VariableRecord {
        name: "__gap".to_string(),
        contract: owner,
    });
    record
}

fn interface(name: &str, bases: &[&str]) -> ContractRecord {
    ContractRecord {
        name: name.to_string(),
        bases: bases.iter().map(|b| b.to_string()).collect(),
        source_path: format!("contracts/interfaces/{}.sol", name),
        functions: vec![FunctionRecord {
            name: "run".to_string(),
            is_implemented: false,
        }],
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_violation_propagation() -> Result<()> {
    // A (upgradeable, gapped) <- B (no gap) <- C (no gap), D interface of A.
    // Expects {B: {A}, C: {A}} with D absent.
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("AccessControlUpgradeable"))
        .add_record(contract("TokenVault", &["AccessControlUpgradeable"]))
        .add_record(contract("StakedTokenVault", &["TokenVault"]))
        .add_record(interface("IVault", &["AccessControlUpgradeable"]))
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    println!("violations: {:?}", report.violations());

    assert!(report.has_violations());
    assert_eq!(report.violations().len(), 2);

    let b_bases = report.responsible_bases("TokenVault").unwrap();
    assert_eq!(
        b_bases.iter().collect::<Vec<_>>(),
        vec!["AccessControlUpgradeable"]
    );

    // The transitive violation is attributed to the upgradeable root,
    // not to the intermediate contract that lacked its gap.
    let c_bases = report.responsible_bases("StakedTokenVault").unwrap();
    assert_eq!(
        c_bases.iter().collect::<Vec<_>>(),
        vec!["AccessControlUpgradeable"]
    );

    assert!(report.responsible_bases("IVault").is_none());
    Ok(())
}

#[test]
fn test_self_declared_gap_passes_and_shields_descendants() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("PausableUpgradeable"))
        .add_record(with_gap(contract("SafeVault", &["PausableUpgradeable"])))
        .add_record(contract("SafeVaultChild", &["SafeVault"]))
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    // SafeVault passes; the branch stops there, so SafeVaultChild is
    // never reached from this root.
    assert!(!report.has_violations());
    Ok(())
}

#[test]
fn test_inherited_gap_does_not_satisfy_descendant() -> Result<()> {
    // LeakyVault sees the base's __gap through inheritance but declares
    // none of its own.
    let leaky = ContractRecord {
        name: "LeakyVault".to_string(),
        bases: vec!["ERC20Upgradeable".to_string()],
        source_path: "contracts/LeakyVault.sol".to_string(),
        functions: vec![FunctionRecord {
            name: "run".to_string(),
            is_implemented: true,
        }],
        variables: vec![VariableRecord {
            name: "__gap".to_string(),
            contract: "ERC20Upgradeable".to_string(),
        }],
    };

    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("ERC20Upgradeable"))
        .add_record(leaky)
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    assert!(report.responsible_bases("LeakyVault").is_some());
    Ok(())
}

#[test]
fn test_interface_inheritors_are_exempt() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("OwnableUpgradeable"))
        .add_record(interface("IOwnableEvents", &["OwnableUpgradeable"]))
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    assert!(!report.has_violations());
    Ok(())
}

#[test]
fn test_deep_chain_attributes_root() -> Result<()> {
    // Four levels deep without a gap anywhere: every level maps to the
    // single upgradeable root. Guards against the propagation step
    // re-keying violations off intermediate ancestors.
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("UUPSUpgradeable"))
        .add_record(contract("L1", &["UUPSUpgradeable"]))
        .add_record(contract("L2", &["L1"]))
        .add_record(contract("L3", &["L2"]))
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    assert_eq!(report.violations().len(), 3);
    for name in ["L1", "L2", "L3"] {
        let bases = report.responsible_bases(name).unwrap();
        assert_eq!(bases.iter().collect::<Vec<_>>(), vec!["UUPSUpgradeable"]);
    }
    Ok(())
}

#[test]
fn test_two_roots_flag_once_each() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("ERC20Upgradeable"))
        .add_record(upgradeable_base("PausableUpgradeable"))
        .add_record(contract(
            "PausableToken",
            &["ERC20Upgradeable", "PausableUpgradeable"],
        ))
        .build()?;

    let classification = classify(&graph);
    let report = check_gaps(&graph, &classification);

    let bases = report.responsible_bases("PausableToken").unwrap();
    assert_eq!(
        bases.iter().collect::<Vec<_>>(),
        vec!["ERC20Upgradeable", "PausableUpgradeable"]
    );
    Ok(())
}

#[test]
fn test_no_upgradeable_contracts_yields_empty_report() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(contract("Plain", &[]))
        .add_record(contract("PlainChild", &["Plain"]))
        .build()?;

    let classification = classify(&graph);
    assert!(classification.upgradeable.is_empty());

    let report = check_gaps(&graph, &classification);
    assert!(!report.has_violations());
    Ok(())
}

#[test]
fn test_report_is_idempotent() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("ERC721Upgradeable"))
        .add_record(contract("NftVault", &["ERC721Upgradeable"]))
        .add_record(contract("NftVaultV2", &["NftVault"]))
        .build()?;

    let classification = classify(&graph);
    let first = check_gaps(&graph, &classification);
    let second = check_gaps(&graph, &classification);

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_checker_produces_findings_through_engine() -> Result<()> {
    let graph = GraphBuilder::new()
        .add_record(upgradeable_base("InitializableUpgradeable"))
        .add_record(contract("Treasury", &["InitializableUpgradeable"]))
        .build()?;

    let context = AnalysisContext::new(graph);
    let registry = CheckerRegistryBuilder::new().with_defaults().build();
    let engine = CheckEngine::new().with_checkers(registry.enabled());

    let report = engine.run(&context)?;

    println!("found {} finding(s)", report.findings().len());
    for finding in report.findings() {
        println!(
            "  - {} {} | {} | {}",
            finding.severity.emoji(),
            finding.severity,
            finding.checker_id,
            finding.title
        );
    }

    assert_eq!(report.findings().len(), 1);
    let finding = &report.findings()[0];
    assert_eq!(finding.severity, Severity::Medium);
    assert_eq!(finding.contract.as_deref(), Some("Treasury"));
    assert_eq!(
        finding.source_path.as_deref(),
        Some("contracts/Treasury.sol")
    );
    assert_eq!(
        finding.responsible_bases(),
        &["InitializableUpgradeable".to_string()]
    );

    assert!(!report.to_json()?.is_empty());
    assert!(report.to_markdown().contains("Missing storage gap"));
    Ok(())
}

#[test]
fn test_checker_metadata() {
    let checker = StorageGapChecker::new();
    assert_eq!(checker.id(), "missing-storage-gap");
    assert_eq!(checker.severity(), Severity::Medium);
    assert!(checker.enabled_by_default());
}
