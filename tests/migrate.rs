use std::fs;
use mtl2assets::domain::{CopyOutcome, Settings};
use mtl2assets::{migrate_assets, Error};

fn settings_in(root: &std::path::Path) -> Settings {
    Settings {
        material_file: root.join("src/assets/tokyo_tower.mtl"),
        source_dir: root.join("dist/assets.old"),
        dest_dir: root.join("src/assets"),
        ..Settings::default()
    }
}

#[test]
fn tower_material_textures_are_migrated() {
    let root = tempfile::tempdir().unwrap();
    let settings = settings_in(root.path());

    fs::create_dir_all(settings.source_dir.join("textures")).unwrap();
    fs::create_dir_all(&settings.dest_dir).unwrap();
    fs::write(settings.source_dir.join("textures/tower_diffuse.jpg"), b"tower bytes").unwrap();
    fs::write(
        &settings.material_file,
        "newmtl Tower\nmap_Kd textures/tower_diffuse.jpg\nnewmtl Glass\nmap_Kd textures/glass.jpg\n",
    )
    .unwrap();

    let report = migrate_assets(&settings).unwrap();

    assert_eq!(
        fs::read(settings.dest_dir.join("textures/tower_diffuse.jpg")).unwrap(),
        b"tower bytes"
    );
    assert!(!settings.dest_dir.join("textures/glass.jpg").exists());
    assert_eq!(report.copied(), 1);
    assert_eq!(
        report.outcomes[1],
        CopyOutcome::Missing { from: settings.source_dir.join("textures/glass.jpg") }
    );

    let again = migrate_assets(&settings).unwrap();
    assert_eq!(again, report);
    assert_eq!(
        fs::read(settings.dest_dir.join("textures/tower_diffuse.jpg")).unwrap(),
        b"tower bytes"
    );
}

#[test]
fn material_directory_is_scanned_for_every_mtl() {
    let root = tempfile::tempdir().unwrap();
    let mut settings = settings_in(root.path());
    let materials = root.path().join("materials");
    settings.material_file = materials.clone();

    fs::create_dir_all(&materials).unwrap();
    fs::create_dir_all(&settings.source_dir).unwrap();
    fs::write(materials.join("a.mtl"), "map_Kd a.jpg\n").unwrap();
    fs::write(materials.join("b.mtl"), "map_Kd b.jpg\n").unwrap();
    fs::write(settings.source_dir.join("a.jpg"), b"a").unwrap();
    fs::write(settings.source_dir.join("b.jpg"), b"b").unwrap();

    let report = migrate_assets(&settings).unwrap();

    assert_eq!(report.copied(), 2);
    assert_eq!(fs::read(settings.dest_dir.join("b.jpg")).unwrap(), b"b");
}

#[test]
fn unreadable_material_file_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let settings = settings_in(root.path());

    let err = migrate_assets(&settings).unwrap_err();

    assert!(matches!(err, Error::MaterialUnreadable { .. }));
    assert!(!settings.dest_dir.exists());
}
