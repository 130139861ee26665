// ============================================================================
// Nitrokit - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Generate command
    ("generate.start", "Reading current language configuration..."),
    ("generate.working", "Updating language files..."),
    (
        "generate.project_root_hint",
        "Please run this command from the root of a Nitrokit project (or pass -C <dir>).",
    ),
    ("generate.failed", "Language generation failed"),
    ("generate.current_state", "Languages: {} (default: {})"),
    (
        "generate.usage_hint",
        "Use --add <codes> to add languages and --default <code> to change the default language.",
    ),
    (
        "generate.unknown_codes",
        "Not in the supported language list, skipped: {}",
    ),
    ("generate.already_present", "Already in the project, ignored: {}"),
    ("generate.added", "Successfully added: {}"),
    ("generate.nothing_added", "No new languages to add."),
    ("generate.default_set", "Default language set to \"{}\"."),
    ("generate.default_unchanged", "Default language remains \"{}\"."),
    ("generate.skipped_file", "File not found, step skipped: {}"),
    (
        "generate.loader_construct_missing",
        "Could not locate the {} in the loader file; it was left unchanged.",
    ),
    ("generate.no_changes", "Nothing to write."),
    ("generate.dry_run_complete", "Dry run complete, no files were written."),
    ("generate.next_steps", "Next steps:"),
    (
        "generate.next_steps_translate",
        "  - Translate the JSON files in the new '{}/<lang_code>' directories.",
    ),
    // Languages command
    ("languages.header", "Supported languages:"),
    ("languages.registry_unreadable", "Could not read the project's locale registry: {}"),
    // Config command
    ("config.no_home_dir", "Could not determine the home directory."),
    ("config.empty_value", "Please provide a value."),
    ("config.updated", "'{}' has been updated successfully!"),
    ("config.not_set", "'{}' is not set."),
    ("config.unknown_key", "Unknown config key: \"{}\". Available keys: {}"),
    // Init command
    ("init.start", "Initializing nitrokit.toml..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it."),
    ("init.config_created", "Configuration file created: {}"),
    ("init.create_failed", "Failed to create configuration file: {}"),
    (
        "init.next_steps",
        "Edit the [project] paths if your project layout differs from the defaults.",
    ),
];
