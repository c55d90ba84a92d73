//! Canned print jobs
//!
//! Fixed job scripts built on [`EscPosBuilder`]: a connection test page, a
//! framed free-text page, a sample itemized receipt and a feature demo.
//! Timestamps are passed in by the caller so every function is a pure
//! input-to-bytes mapping; [`crate::Printer`] supplies the clock.
//!
//! The fixture text is Turkish on purpose - it keeps the Windows-1254
//! high-byte path exercised on real paper.

use bytes::Bytes;
use rawprint_core::{Alignment, CutMode, EscPosBuilder, LINE_WIDTH};

/// Connection test page: centered title, connection details, timestamp.
pub fn test_page(address: &str, port: u16, timestamp: &str) -> Bytes {
    let mut job = EscPosBuilder::new();
    job.initialize()
        .align(Alignment::Center)
        .double_text_line("TEST YAZDIR")
        .newline()
        .align(Alignment::Left)
        .text_line("Yazıcı Bağlantı Testi")
        .horizontal_line('-', LINE_WIDTH)
        .text_line(&format!("IP Adresi: {address}"))
        .text_line(&format!("Port: {port}"))
        .horizontal_line('-', LINE_WIDTH)
        .text_line(&format!("Tarih: {timestamp}"))
        .newlines(2)
        .align(Alignment::Center)
        .text_line("Test Başarılı!")
        .feed_paper(3)
        .cut_paper(CutMode::Full);
    job.build()
}

/// Free text between rules, with a bold header and the timestamp below.
pub fn custom_text(text: &str, timestamp: &str) -> Bytes {
    let mut job = EscPosBuilder::new();
    job.initialize()
        .align(Alignment::Center)
        .bold_text_line("YAZDIRMA")
        .newline()
        .align(Alignment::Left)
        .horizontal_line('-', LINE_WIDTH)
        .text_line(text)
        .horizontal_line('-', LINE_WIDTH)
        .newline()
        .align(Alignment::Center)
        .text_line(&format!("Tarih: {timestamp}"))
        .feed_paper(3)
        .cut_paper(CutMode::Full);
    job.build()
}

/// Sample itemized receipt with fixed demo content.
pub fn sample_receipt(timestamp: &str) -> Bytes {
    let mut job = EscPosBuilder::new();
    job.initialize()
        // Title
        .align(Alignment::Center)
        .double_text_line("ÖRNEK FİŞ")
        .text_line("Termal Yazıcı Test")
        .newline()
        // Vendor block
        .text_line("ABC Şirketi Ltd. Şti.")
        .text_line("Atatürk Cad. No:123")
        .text_line("İstanbul / Türkiye")
        .text_line("Tel: 0212 123 45 67")
        .newline()
        // Dated header
        .align(Alignment::Left)
        .horizontal_line('=', LINE_WIDTH)
        .two_column_text("Tarih:", timestamp, LINE_WIDTH)
        .two_column_text("Fiş No:", "2024-001", LINE_WIDTH)
        .horizontal_line('=', LINE_WIDTH)
        .newline()
        // Line items
        .bold_text_line("ÜRÜNLER")
        .horizontal_line('-', LINE_WIDTH)
        .text_line("Ürün 1")
        .two_column_text("  2 x 10.00 TL", "20.00 TL", LINE_WIDTH)
        .newline()
        .text_line("Ürün 2")
        .two_column_text("  1 x 15.50 TL", "15.50 TL", LINE_WIDTH)
        .newline()
        .text_line("Ürün 3")
        .two_column_text("  3 x 8.00 TL", "24.00 TL", LINE_WIDTH)
        .horizontal_line('-', LINE_WIDTH)
        // Totals
        .newline()
        .align(Alignment::Right)
        .bold_text_line("ARA TOPLAM: 59.50 TL")
        .text_line("KDV (%18): 10.71 TL")
        .horizontal_line('=', LINE_WIDTH)
        .double_text_line("TOPLAM: 70.21 TL")
        .horizontal_line('=', LINE_WIDTH)
        // Footer
        .newline()
        .align(Alignment::Center)
        .text_line("Bizi tercih ettiğiniz için")
        .text_line("teşekkür ederiz!")
        .newline()
        .text_line("www.orneksite.com")
        .feed_paper(4)
        .cut_paper(CutMode::Full);
    job.build()
}

/// Feature showcase exercising every builder operation.
pub fn demo_page() -> Bytes {
    let mut job = EscPosBuilder::new();
    job.initialize()
        .align(Alignment::Center)
        .double_text_line("ESC/POS DEMO")
        .newline()
        .align(Alignment::Left)
        .text_line("1. Normal Metin")
        .text_line("Bu normal boyutta bir metindir.")
        .newline()
        .text_line("2. Kalın Metin")
        .bold_text_line("Bu kalın (bold) bir metindir.")
        .newline()
        .text_line("3. Altı Çizili Metin")
        .underline_text_line("Bu altı çizili bir metindir.")
        .newline()
        .text_line("4. Çift Boyut")
        .double_text_line("Çift Boyut")
        .newline()
        .text_line("5. Hizalama")
        .align(Alignment::Left)
        .text_line("Sola hizalı")
        .align(Alignment::Center)
        .text_line("Ortaya hizalı")
        .align(Alignment::Right)
        .text_line("Sağa hizalı")
        .align(Alignment::Left)
        .newline()
        .text_line("6. Yatay Çizgiler")
        .horizontal_line('-', LINE_WIDTH)
        .horizontal_line('=', LINE_WIDTH)
        .horizontal_line('*', LINE_WIDTH)
        .newline()
        .text_line("7. İki Sütunlu Metin")
        .two_column_text("Sol Taraf", "Sağ Taraf", LINE_WIDTH)
        .two_column_text("Ürün", "Fiyat", LINE_WIDTH)
        .two_column_text("Toplam", "100.00 TL", LINE_WIDTH)
        .newline()
        .text_line("8. Türkçe Karakter Testi")
        .text_line("ÇçĞğİıÖöŞşÜü")
        .newline()
        .align(Alignment::Center)
        .horizontal_line('=', LINE_WIDTH)
        .text_line("DEMO TAMAMLANDI")
        .horizontal_line('=', LINE_WIDTH)
        .feed_paper(3)
        .cut_paper(CutMode::Full);
    job.build()
}
