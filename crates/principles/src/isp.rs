//! Interface Segregation: small device traits instead of one fat one.
//!
//! [`Machine`] forces every device to answer for printing, faxing and
//! scanning, so a plain printer has to fail at runtime. The segregated
//! [`Printer`] and [`Scanner`] traits let each device implement only what it
//! can do, and the compiler rejects the rest.

use crate::error::DeviceError;

// =============================================================================
// Fat interface
// =============================================================================

/// One trait for every office capability.
pub trait Machine {
    fn print(&mut self, doc: &str) -> Result<(), DeviceError>;
    fn fax(&mut self, doc: &str) -> Result<(), DeviceError>;
    fn scan(&mut self, doc: &str) -> Result<(), DeviceError>;
}

/// Supports all of [`Machine`]; records each job as `"<op>: <doc>"`.
#[derive(Debug, Default)]
pub struct MultiFunctionPrinter {
    pub jobs: Vec<String>,
}

impl Machine for MultiFunctionPrinter {
    fn print(&mut self, doc: &str) -> Result<(), DeviceError> {
        self.jobs.push(format!("print: {}", doc));
        Ok(())
    }

    fn fax(&mut self, doc: &str) -> Result<(), DeviceError> {
        self.jobs.push(format!("fax: {}", doc));
        Ok(())
    }

    fn scan(&mut self, doc: &str) -> Result<(), DeviceError> {
        self.jobs.push(format!("scan: {}", doc));
        Ok(())
    }
}

/// Can only print, yet has to implement `fax` and `scan`.
#[derive(Debug, Default)]
pub struct OldFashionPrinter {
    pub printed: Vec<String>,
}

impl Machine for OldFashionPrinter {
    fn print(&mut self, doc: &str) -> Result<(), DeviceError> {
        self.printed.push(doc.to_string());
        Ok(())
    }

    fn fax(&mut self, _doc: &str) -> Result<(), DeviceError> {
        Err(DeviceError::Unsupported {
            device: "OldFashionPrinter",
            operation: "fax",
        })
    }

    fn scan(&mut self, _doc: &str) -> Result<(), DeviceError> {
        Err(DeviceError::Unsupported {
            device: "OldFashionPrinter",
            operation: "scan",
        })
    }
}

// =============================================================================
// Segregated interfaces
// =============================================================================

pub trait Printer {
    fn print(&mut self, doc: &str);
}

pub trait Scanner {
    fn scan(&mut self, doc: &str);
}

/// A device that can both print and scan.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

/// Prints and nothing else.
#[derive(Debug, Default)]
pub struct MyPrinter {
    pub printed: Vec<String>,
}

impl Printer for MyPrinter {
    fn print(&mut self, doc: &str) {
        tracing::info!("Printing: {}", doc);
        self.printed.push(doc.to_string());
    }
}

/// Prints and scans as one unit.
#[derive(Debug, Default)]
pub struct Photocopier {
    pub printed: Vec<String>,
    pub scanned: Vec<String>,
}

impl Printer for Photocopier {
    fn print(&mut self, doc: &str) {
        self.printed.push(doc.to_string());
    }
}

impl Scanner for Photocopier {
    fn scan(&mut self, doc: &str) {
        self.scanned.push(doc.to_string());
    }
}

/// Assembles a multi-function device from a separate printer and scanner.
#[derive(Debug, Default)]
pub struct MultiFunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }
}

impl<P: Printer, S> Printer for MultiFunctionMachine<P, S> {
    fn print(&mut self, doc: &str) {
        self.printer.print(doc);
    }
}

impl<P, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&mut self, doc: &str) {
        self.scanner.scan(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(device: &mut impl MultiFunctionDevice, doc: &str) {
        device.scan(doc);
        device.print(doc);
    }

    #[test]
    fn test_old_fashion_printer_rejects_fax() {
        let mut old = OldFashionPrinter::default();
        Machine::print(&mut old, "memo").unwrap();

        assert_eq!(
            old.fax("memo"),
            Err(DeviceError::Unsupported {
                device: "OldFashionPrinter",
                operation: "fax",
            })
        );
        assert!(Machine::scan(&mut old, "memo").is_err());
        assert_eq!(old.printed, vec!["memo"]);
    }

    #[test]
    fn test_multi_function_printer() {
        let mut mfp = MultiFunctionPrinter::default();
        Machine::print(&mut mfp, "a").unwrap();
        mfp.fax("b").unwrap();
        Machine::scan(&mut mfp, "c").unwrap();

        assert_eq!(mfp.jobs, vec!["print: a", "fax: b", "scan: c"]);
    }

    #[test]
    fn test_machine_delegates() {
        let mut machine = MultiFunctionMachine::new(MyPrinter::default(), Photocopier::default());
        copy(&mut machine, "report");

        assert_eq!(machine.printer().printed, vec!["report"]);
        assert_eq!(machine.scanner().scanned, vec!["report"]);
        assert!(machine.scanner().printed.is_empty());
    }

    #[test]
    fn test_photocopier_is_multi_function() {
        let mut copier = Photocopier::default();
        copy(&mut copier, "page");

        assert_eq!(copier.printed, vec!["page"]);
        assert_eq!(copier.scanned, vec!["page"]);
    }
}
