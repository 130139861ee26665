// ============================================================================
// Nitrokit - Türkçe Çeviri Tablosu
// ============================================================================
//
// 文件: src/i18n/tr_tr.rs
// 职责: Turkish translation content definition
// 边界:
//   - ✅ Turkish translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// Türkçe çeviri tablosu
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Generate komutu
    ("generate.start", "Mevcut dil yapılandırması okunuyor..."),
    ("generate.working", "Dil dosyaları güncelleniyor..."),
    (
        "generate.project_root_hint",
        "Lütfen bu komutu bir Nitrokit projesinin kök dizininden çalıştırın (veya -C <dizin> verin).",
    ),
    ("generate.failed", "Dil oluşturma başarısız oldu"),
    ("generate.current_state", "Diller: {} (varsayılan: {})"),
    (
        "generate.usage_hint",
        "Dil eklemek için --add <kodlar>, varsayılan dili değiştirmek için --default <kod> kullanın.",
    ),
    (
        "generate.unknown_codes",
        "Desteklenen dil listesinde yok, atlandı: {}",
    ),
    ("generate.already_present", "Projede zaten var, yok sayıldı: {}"),
    ("generate.added", "Başarıyla eklendi: {}"),
    ("generate.nothing_added", "Eklenecek yeni dil yok."),
    ("generate.default_set", "Varsayılan dil \"{}\" olarak ayarlandı."),
    ("generate.default_unchanged", "Varsayılan dil \"{}\" olarak kaldı."),
    ("generate.skipped_file", "Dosya bulunamadı, adım atlandı: {}"),
    (
        "generate.loader_construct_missing",
        "Yükleyici dosyasında {} bulunamadı; değiştirilmedi.",
    ),
    ("generate.no_changes", "Yazılacak bir şey yok."),
    ("generate.dry_run_complete", "Deneme çalıştırması tamamlandı, hiçbir dosya yazılmadı."),
    ("generate.next_steps", "Sonraki adımlar:"),
    (
        "generate.next_steps_translate",
        "  - Yeni '{}/<dil_kodu>' dizinlerindeki JSON dosyalarını çevirin.",
    ),
    // Languages komutu
    ("languages.header", "Desteklenen diller:"),
    ("languages.registry_unreadable", "Projenin dil kaydı okunamadı: {}"),
    // Config komutu
    ("config.no_home_dir", "Ana dizin belirlenemedi."),
    ("config.empty_value", "Lütfen bir değer girin."),
    ("config.updated", "'{}' başarıyla güncellendi!"),
    ("config.not_set", "'{}' ayarlanmamış."),
    ("config.unknown_key", "Bilinmeyen yapılandırma anahtarı: \"{}\". Kullanılabilir anahtarlar: {}"),
    // Init komutu
    ("init.start", "nitrokit.toml oluşturuluyor..."),
    ("init.config_exists", "Yapılandırma dosyası zaten var: {}"),
    ("init.use_force_hint", "Üzerine yazmak için --force kullanın."),
    ("init.config_created", "Yapılandırma dosyası oluşturuldu: {}"),
    ("init.create_failed", "Yapılandırma dosyası oluşturulamadı: {}"),
    (
        "init.next_steps",
        "Proje yapınız varsayılanlardan farklıysa [project] yollarını düzenleyin.",
    ),
];
