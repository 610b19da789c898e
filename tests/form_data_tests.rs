#[cfg(test)]
mod form_data_tests {
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    use formseed::dataset::Dataset;
    use formseed::orchestrator::{generate, Selection, HOST_FILE_NAME, POOL_FILE_NAME};

    fn read_lines(path: &std::path::Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// A default run writes exactly the two expected files
    #[test]
    fn test_produces_exactly_two_files() {
        let dir = TempDir::new().unwrap();
        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![HOST_FILE_NAME.to_string(), POOL_FILE_NAME.to_string()]);
    }

    #[test]
    fn test_pool_file_content() {
        let dir = TempDir::new().unwrap();
        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();

        let lines = read_lines(&dir.path().join(POOL_FILE_NAME));
        assert_eq!(
            lines,
            vec![
                "name,start_address,end_address,netmask,net_address,gateway",
                "Pool1,192.168.1.10,192.168.1.50,24,192.168.1.0,192.168.1.1",
                "Pool2,10.0.0.10,10.0.0.50,24,10.0.0.1,10.0.0.1",
                "Pool3,172.16.0.10,172.16.0.50,16,10.0.0.1,172.16.0.1",
                "Pool4,192.168.100.10,192.168.100.50,24,192.168.1.0,192.168.100.1",
            ]
        );
    }

    #[test]
    fn test_host_file_content() {
        let dir = TempDir::new().unwrap();
        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();

        let lines = read_lines(&dir.path().join(HOST_FILE_NAME));
        assert_eq!(
            lines,
            vec![
                "fqdn,ip,mac",
                "machine1.domain.ch,192.168.1.10,80:3f:5d:00:0c:65",
                "hodor1.domain.ch,192.168.1.13,16:34:c3:14:11:90",
                "chasperli1.domain.ch,192.168.1.14,76:34:c3:13:11:90",
                "sennehund24.domain.ch,192.168.1.15,80:3f:5d:00:14:65",
            ]
        );
    }

    /// Rows have as many fields as the header, in header order
    #[test]
    fn test_field_count_matches_header() {
        let dir = TempDir::new().unwrap();
        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();

        for name in [POOL_FILE_NAME, HOST_FILE_NAME] {
            let lines = read_lines(&dir.path().join(name));
            let columns = lines[0].split(',').count();
            for line in &lines[1..] {
                assert_eq!(line.split(',').count(), columns, "row {:?} in {}", line, name);
            }
        }
    }

    /// Re-running overwrites the files with identical bytes
    #[test]
    fn test_rerun_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let pool_path = dir.path().join(POOL_FILE_NAME);
        let host_path = dir.path().join(HOST_FILE_NAME);

        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();
        let first = (fs::read(&pool_path).unwrap(), fs::read(&host_path).unwrap());

        generate(&Dataset::builtin(), dir.path(), Selection::All).unwrap();
        let second = (fs::read(&pool_path).unwrap(), fs::read(&host_path).unwrap());

        assert_eq!(first, second);
    }

    #[test]
    fn test_yaml_dataset_replaces_builtin() {
        let mut data_file = NamedTempFile::new().unwrap();
        write!(
            data_file,
            "hosts:\n  - fqdn: \"lab1.example.org\"\n    ip: \"10.1.0.11\"\n    \
             mac: \"52:54:00:12:34:56\"\n"
        )
        .unwrap();

        let dataset = Dataset::from_yaml_file(data_file.path()).unwrap();
        let dir = TempDir::new().unwrap();
        let generated = generate(&dataset, dir.path(), Selection::All).unwrap();

        assert_eq!(generated.pools.unwrap().rows, 0);
        assert_eq!(
            read_lines(&dir.path().join(POOL_FILE_NAME)),
            vec!["name,start_address,end_address,netmask,net_address,gateway"]
        );
        assert_eq!(
            read_lines(&dir.path().join(HOST_FILE_NAME)),
            vec!["fqdn,ip,mac", "lab1.example.org,10.1.0.11,52:54:00:12:34:56"]
        );
    }
}
