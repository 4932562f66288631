#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
}

#[macro_export]
macro_rules! error {
    ($code:ident) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$code)
    };
}

impl Error {
    pub fn from_code(code: ErrorCode) -> Error {
        Error { code }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Every failure the interpreter can report. The messages printed by
/// `Display` are the wire contract of the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownCommand,
    ExpectedNumber,
    InvalidNumber,
    ExpectedRightParen,
    UnterminatedString,
    ExpectedInputVariable,
    ExpectedLetVariable,
    InvalidVariable,
    ExpectedLetEquals,
    ExpectedIfOperator,
    ExpectedIfThen,
    InvalidLineNumber,
    DivisionByZero,
    LineNotFound,
    StackOverflow,
    ReturnWithoutGosub,
    MemoryFull,
    RunInProgram,
    ListInProgram,
    NewInProgram,
    SaveInProgram,
    LoadInProgram,
    FilenameRequired,
    FileNotFound,
    CannotOpenFile,
    LprintFile,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self.code {
            UnknownCommand => "UNKNOWN COMMAND",
            ExpectedNumber => "EXPECTED NUMBER",
            InvalidNumber => "INVALID NUMBER",
            ExpectedRightParen => "EXPECTED ')'",
            UnterminatedString => "UNTERMINATED STRING",
            ExpectedInputVariable => "EXPECTED VARIABLE FOR INPUT",
            ExpectedLetVariable => "EXPECTED VARIABLE FOR LET",
            InvalidVariable => "INVALID VARIABLE",
            ExpectedLetEquals => "EXPECTED '=' IN LET",
            ExpectedIfOperator => "EXPECTED OPERATOR IN IF",
            ExpectedIfThen => "EXPECTED 'THEN' IN IF",
            InvalidLineNumber => "INVALID LINE NUMBER",
            DivisionByZero => "DIVISION BY ZERO",
            LineNotFound => "LINE NOT FOUND",
            StackOverflow => "GOSUB STACK OVERFLOW",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            MemoryFull => "PROGRAM MEMORY FULL",
            RunInProgram => "CAN'T USE RUN IN A PROGRAM",
            ListInProgram => "CAN'T USE LIST IN A PROGRAM",
            NewInProgram => "CAN'T USE NEW IN A PROGRAM",
            SaveInProgram => "CAN'T USE SAVE IN A PROGRAM",
            LoadInProgram => "CAN'T USE LOAD IN A PROGRAM",
            FilenameRequired => "FILENAME REQUIRED",
            FileNotFound => "FILE NOT FOUND",
            CannotOpenFile => "CANNOT OPEN FILE",
            LprintFile => "COULD NOT OPEN LPRINT.OUT FILE",
        };
        write!(f, "{}", s)
    }
}
